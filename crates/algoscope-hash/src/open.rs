//! Open addressing with linear probing.
//!
//! Every slot holds at most one entry. A key starts at its home slot
//! `hash(key) % capacity` and walks forward (wrapping) until it finds itself,
//! an empty slot, or has tried every slot. Removal leaves a tombstone so
//! later keys in the same probe run stay reachable; inserts reuse the first
//! tombstone they pass.

use std::fmt::Debug;

use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use serde::{Deserialize, Serialize};

use crate::hasher::{HashFunction, HashKey};

/// One slot of an [`OpenTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }
}

/// Slots visited while looking for a key.
#[derive(Debug)]
struct Probe {
    visited: Vec<usize>,
    /// Slot holding the key
    found: Option<usize>,
    /// First empty or tombstoned slot passed
    vacant: Option<usize>,
}

/// Hash map using linear probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTable<K, V> {
    slots: Vec<Slot<K, V>>,
    len: usize,
    function: HashFunction,
}

/// Hash set using linear probing.
pub type OpenSet<K> = OpenTable<K, ()>;

impl<K: HashKey, V: Clone + Debug> OpenTable<K, V> {
    /// Create an empty table with `capacity` slots.
    pub fn new(capacity: usize, function: HashFunction) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![Slot::Empty; capacity],
            len: 0,
            function,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored entries (tombstones excluded).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn function(&self) -> HashFunction {
        self.function
    }

    /// Occupied slots over capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Home slot of `key`.
    pub fn home(&self, key: &K) -> usize {
        self.function.index(key, self.slots.len())
    }

    /// Stored entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.probe(key).found.map(|index| &self.slots[index]) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.probe(key).found.is_some()
    }

    /// Insert or update `key`, returning where it landed.
    pub fn insert(&mut self, key: K, value: V) -> Result<Outcome> {
        let probe = self.probe(&key);
        self.place(probe, key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.probe(key).found?;
        self.take(index)
    }

    /// Move every entry into a table of `capacity` slots.
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        *self = self.rehashed(capacity)?.0;
        Ok(())
    }

    /// Trace inserting `key`. An existing key has its value replaced.
    pub fn trace_insert(&self, key: K, value: V) -> Result<Timeline<Self>> {
        let probe = self.probe(&key);
        let mut tracer = self.start_probe(&key, &probe);

        let outcome = tracer.model_mut().place(probe, key.clone(), value.clone())?;
        let description = match outcome {
            Outcome::Updated { index } => format!("Update {key:?} in slot {index} to {value:?}"),
            Outcome::Inserted { index } => format!("Store {key:?} = {value:?} in slot {index}"),
            _ => format!("Store {key:?}"),
        };
        tracer.record(
            StepKind::Insert,
            outcome.index().into_iter().collect(),
            description,
        );
        Ok(tracer.finish(format!("insert {key:?}"), outcome))
    }

    /// Trace a lookup of `key`.
    pub fn trace_get(&self, key: &K) -> Timeline<Self> {
        let probe = self.probe(key);
        let mut tracer = self.start_probe(key, &probe);
        let label = format!("get {key:?}");

        match probe.found {
            Some(index) => {
                tracer.mark(vec![index], format!("Found {key:?} in slot {index}"));
                tracer.finish(label, Outcome::Found { index })
            }
            None => {
                tracer.mark(Vec::new(), format!("{key:?} is not in the table"));
                tracer.finish(label, Outcome::NotFound)
            }
        }
    }

    /// Trace removing `key`, leaving a tombstone behind.
    pub fn trace_remove(&self, key: &K) -> Timeline<Self> {
        let probe = self.probe(key);
        let mut tracer = self.start_probe(key, &probe);
        let label = format!("remove {key:?}");

        match probe.found {
            Some(index) => {
                tracer.model_mut().take(index);
                tracer.record(
                    StepKind::Remove,
                    vec![index],
                    format!("Replace {key:?} in slot {index} with a tombstone"),
                );
                tracer.finish(label, Outcome::Removed { index })
            }
            None => {
                tracer.mark(Vec::new(), format!("{key:?} is not in the table"));
                tracer.finish(label, Outcome::NotFound)
            }
        }
    }

    /// Trace moving every entry into a table of `capacity` slots.
    ///
    /// Entries are rehashed in old slot order; tombstones are dropped.
    pub fn trace_resize(&self, capacity: usize) -> Result<Timeline<Self>> {
        let (_, moves) = self.rehashed(capacity)?;
        let mut tracer = Tracer::new(self.clone());

        *tracer.model_mut() = Self::new(capacity, self.function)?;
        tracer.pass(format!(
            "Allocate {capacity} slots (was {})",
            self.capacity()
        ));
        for (from, to) in moves {
            if let Slot::Occupied { key, value } = &self.slots[from] {
                tracer.model_mut().slots[to] = Slot::Occupied {
                    key: key.clone(),
                    value: value.clone(),
                };
                tracer.model_mut().len += 1;
                tracer.record(
                    StepKind::Move,
                    vec![to],
                    format!("Rehash {key:?} from slot {from} to slot {to}"),
                );
            }
        }

        Ok(tracer.finish(
            format!("resize {} -> {capacity}", self.capacity()),
            Outcome::Completed,
        ))
    }

    /// Trace doubling the capacity.
    pub fn trace_grow(&self) -> Result<Timeline<Self>> {
        self.trace_resize(self.capacity() * 2)
    }

    /// Trace halving the capacity.
    pub fn trace_shrink(&self) -> Result<Timeline<Self>> {
        self.trace_resize((self.capacity() / 2).max(1))
    }

    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let home = self.home(key);
        let mut visited = Vec::new();
        let mut vacant = None;

        for offset in 0..capacity {
            let index = (home + offset) % capacity;
            visited.push(index);
            match &self.slots[index] {
                Slot::Empty => {
                    vacant.get_or_insert(index);
                    break;
                }
                Slot::Tombstone => {
                    vacant.get_or_insert(index);
                }
                Slot::Occupied { key: existing, .. } if existing == key => {
                    return Probe {
                        visited,
                        found: Some(index),
                        vacant,
                    };
                }
                Slot::Occupied { .. } => {}
            }
        }

        Probe {
            visited,
            found: None,
            vacant,
        }
    }

    /// Record the hash and every probed slot.
    fn start_probe(&self, key: &K, probe: &Probe) -> Tracer<Self> {
        let mut tracer = Tracer::new(self.clone());
        let home = self.home(key);
        tracer.boundary(
            vec![home],
            format!(
                "{} hash of {key:?} is {}, home slot {home}",
                self.function,
                key.hash_code(self.function)
            ),
        );
        for &index in &probe.visited {
            let description = match &self.slots[index] {
                Slot::Empty => format!("Slot {index} is empty"),
                Slot::Tombstone => format!("Slot {index} holds a tombstone"),
                Slot::Occupied { key: existing, .. } if existing == key => {
                    format!("Slot {index} holds {key:?}")
                }
                Slot::Occupied { key: existing, .. } => {
                    format!("Slot {index} holds {existing:?}, keep probing")
                }
            };
            tracer.record(StepKind::Probe, vec![index], description);
        }
        tracer
    }

    fn place(&mut self, probe: Probe, key: K, value: V) -> Result<Outcome> {
        match (probe.found, probe.vacant) {
            (Some(index), _) => {
                self.slots[index] = Slot::Occupied { key, value };
                Ok(Outcome::Updated { index })
            }
            (None, Some(index)) => {
                self.slots[index] = Slot::Occupied { key, value };
                self.len += 1;
                Ok(Outcome::Inserted { index })
            }
            (None, None) => Err(Error::TableFull {
                capacity: self.slots.len(),
            }),
        }
    }

    fn take(&mut self, index: usize) -> Option<V> {
        match std::mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                Some(value)
            }
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    /// A copy of this table with `capacity` slots, plus the `(from, to)`
    /// slot of every moved entry.
    fn rehashed(&self, capacity: usize) -> Result<(Self, Vec<(usize, usize)>)> {
        if capacity < self.len {
            return Err(Error::CapacityTooSmall {
                entries: self.len,
                capacity,
            });
        }
        let mut resized = Self::new(capacity, self.function)?;
        let mut moves = Vec::with_capacity(self.len);
        for (from, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { key, value } = slot {
                let outcome = resized.insert(key.clone(), value.clone())?;
                if let Some(to) = outcome.index() {
                    moves.push((from, to));
                }
            }
        }
        Ok((resized, moves))
    }
}

impl<K: HashKey> OpenSet<K> {
    /// Trace adding `key` to the set.
    pub fn trace_add(&self, key: K) -> Result<Timeline<Self>> {
        self.trace_insert(key, ())
    }

    /// Add `key`; `false` if it was already present.
    pub fn add(&mut self, key: K) -> Result<bool> {
        Ok(matches!(self.insert(key, ())?, Outcome::Inserted { .. }))
    }
}
