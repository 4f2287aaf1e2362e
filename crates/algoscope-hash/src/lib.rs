//! Algoscope Hashing
//!
//! Two textbook hash tables, each available as a map and as a set:
//!
//! - [`OpenTable`] / [`OpenSet`]: open addressing with linear probing and
//!   tombstones
//! - [`ChainedTable`] / [`ChainedSet`]: separate chaining over linked buckets
//!
//! Keys are hashed with one of the illustrative [`HashFunction`]s. Resizing
//! rehashes every stored entry into the new table.

mod chained;
mod hasher;
mod open;

pub use chained::{ChainedSet, ChainedTable, Entry};
pub use hasher::{HashFunction, HashKey};
pub use open::{OpenSet, OpenTable, Slot};

/// Default table size for new visualizers.
pub const DEFAULT_CAPACITY: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_serialize_for_renderers() {
        let mut open: OpenTable<String, i64> =
            OpenTable::new(3, HashFunction::Additive).unwrap();
        open.insert("a".to_string(), 1).unwrap();
        let json = serde_json::to_value(&open).unwrap();
        // 'a' = 97, 97 % 3 = 1
        assert_eq!(json["slots"][0]["state"], "empty");
        assert_eq!(json["slots"][1]["state"], "occupied");
        assert_eq!(json["slots"][1]["key"], "a");
        assert_eq!(json["len"], 1);

        let mut chained: ChainedTable<String, i64> =
            ChainedTable::new(2, HashFunction::Additive).unwrap();
        chained.insert("a".to_string(), 1);
        let json = serde_json::to_value(&chained).unwrap();
        assert_eq!(json["buckets"][1][0]["value"], 1);
        assert_eq!(json["function"], "additive");
    }

    #[test]
    fn both_tables_agree_on_membership() {
        let mut open = OpenSet::new(DEFAULT_CAPACITY, HashFunction::Positional).unwrap();
        let mut chained = ChainedSet::new(DEFAULT_CAPACITY, HashFunction::Positional).unwrap();
        for word in ["heap", "tree", "trie", "list"] {
            open.add(word.to_string()).unwrap();
            chained.add(word.to_string());
        }
        for word in ["heap", "tree", "trie", "list", "graph"] {
            let word = word.to_string();
            assert_eq!(open.contains(&word), chained.contains(&word), "{word}");
        }
    }
}
