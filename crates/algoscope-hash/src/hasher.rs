//! Illustrative hash functions. Not cryptographic, not even good; they are
//! chosen so a student can compute a key's home slot by hand.

use std::fmt::{self, Debug};
use std::str::FromStr;

use algoscope_engine::Error;
use serde::{Deserialize, Serialize};

/// How a key's hash code is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// Sum of character codes. Anagrams collide.
    #[default]
    Additive,
    /// Character codes weighted by their 1-based position.
    Positional,
}

impl HashFunction {
    pub const ALL: [HashFunction; 2] = [HashFunction::Additive, HashFunction::Positional];

    pub fn id(&self) -> &'static str {
        match self {
            HashFunction::Additive => "additive",
            HashFunction::Positional => "positional",
        }
    }

    /// Slot index for `key` in a table of `capacity` slots.
    pub fn index<K: HashKey>(&self, key: &K, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        (key.hash_code(*self) % capacity as u64) as usize
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for HashFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashFunction::ALL
            .into_iter()
            .find(|function| function.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown hash function `{s}`")))
    }
}

/// Keys the tables can store.
pub trait HashKey: Clone + Debug + PartialEq {
    fn hash_code(&self, function: HashFunction) -> u64;
}

impl HashKey for i64 {
    /// Integers hash to their magnitude under either function.
    fn hash_code(&self, _function: HashFunction) -> u64 {
        self.unsigned_abs()
    }
}

impl HashKey for u64 {
    fn hash_code(&self, _function: HashFunction) -> u64 {
        *self
    }
}

impl HashKey for String {
    fn hash_code(&self, function: HashFunction) -> u64 {
        let codes = self.chars().map(|c| c as u64);
        match function {
            HashFunction::Additive => codes.fold(0, u64::wrapping_add),
            HashFunction::Positional => codes
                .enumerate()
                .fold(0, |sum, (i, code)| sum.wrapping_add(code.wrapping_mul(i as u64 + 1))),
        }
    }
}
