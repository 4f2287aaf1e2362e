//! Separate chaining: each bucket is a singly linked list of entries.
//!
//! Step indices are `[bucket]` when a whole bucket is highlighted and
//! `[bucket, position]` when a node inside its chain is.

use std::fmt::Debug;

use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use algoscope_structures::SinglyLinkedList;
use serde::{Deserialize, Serialize};

use crate::hasher::{HashFunction, HashKey};

/// A key/value node in a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// Hash map using separate chaining. Never fills up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainedTable<K, V> {
    buckets: Vec<SinglyLinkedList<Entry<K, V>>>,
    len: usize,
    function: HashFunction,
}

/// Hash set using separate chaining.
pub type ChainedSet<K> = ChainedTable<K, ()>;

impl<K: HashKey, V: Clone + Debug> ChainedTable<K, V> {
    /// Create a table with `capacity` empty buckets.
    pub fn new(capacity: usize, function: HashFunction) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            buckets: (0..capacity).map(|_| SinglyLinkedList::new()).collect(),
            len: 0,
            function,
        })
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn function(&self) -> HashFunction {
        self.function
    }

    /// Entries per bucket. May exceed 1.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn buckets(&self) -> &[SinglyLinkedList<Entry<K, V>>] {
        &self.buckets
    }

    /// Bucket `key` hashes to.
    pub fn bucket_of(&self, key: &K) -> usize {
        self.function.index(key, self.buckets.len())
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(SinglyLinkedList::len).max().unwrap_or(0)
    }

    /// Stored entries, bucket by bucket.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = &self.buckets[self.bucket_of(key)];
        bucket.iter().find(|entry| entry.key == *key).map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Insert or update `key`. Returns the bucket it landed in.
    pub fn insert(&mut self, key: K, value: V) -> Outcome {
        let bucket = self.bucket_of(&key);
        let chain = &mut self.buckets[bucket];
        match chain.position(|entry| entry.key == key) {
            Some(position) => {
                if let Some(entry) = chain.get_mut(position) {
                    entry.value = value;
                }
                Outcome::Updated { index: bucket }
            }
            None => {
                chain.push_back(Entry { key, value });
                self.len += 1;
                Outcome::Inserted { index: bucket }
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let position = chain.position(|entry| entry.key == *key)?;
        let entry = chain.remove_at(position).ok()?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Redistribute every entry over `capacity` buckets.
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        *self = self.trace_resize(capacity)?.result;
        Ok(())
    }

    /// Trace inserting `key`, walking its chain to look for a duplicate.
    pub fn trace_insert(&self, key: K, value: V) -> Timeline<Self> {
        let (mut tracer, bucket, found) = self.start_walk(&key);

        let outcome = tracer.model_mut().insert(key.clone(), value.clone());
        let description = match found {
            Some(position) => {
                format!("Update {key:?} at node {position} of bucket {bucket} to {value:?}")
            }
            None => format!("Append {key:?} = {value:?} to bucket {bucket}"),
        };
        let position = found.unwrap_or(self.buckets[bucket].len());
        tracer.record(StepKind::Insert, vec![bucket, position], description);
        tracer.finish(format!("insert {key:?}"), outcome)
    }

    /// Trace a lookup of `key`.
    pub fn trace_get(&self, key: &K) -> Timeline<Self> {
        let (mut tracer, bucket, found) = self.start_walk(key);
        let label = format!("get {key:?}");

        match found {
            Some(position) => {
                tracer.mark(
                    vec![bucket, position],
                    format!("Found {key:?} at node {position} of bucket {bucket}"),
                );
                tracer.finish(label, Outcome::Found { index: bucket })
            }
            None => {
                tracer.mark(vec![bucket], format!("{key:?} is not in bucket {bucket}"));
                tracer.finish(label, Outcome::NotFound)
            }
        }
    }

    /// Trace unlinking `key` from its chain.
    pub fn trace_remove(&self, key: &K) -> Timeline<Self> {
        let (mut tracer, bucket, found) = self.start_walk(key);
        let label = format!("remove {key:?}");

        match found {
            Some(position) => {
                tracer.model_mut().remove(key);
                tracer.record(
                    StepKind::Remove,
                    vec![bucket, position],
                    format!("Unlink {key:?} from bucket {bucket}"),
                );
                tracer.finish(label, Outcome::Removed { index: bucket })
            }
            None => {
                tracer.mark(vec![bucket], format!("{key:?} is not in bucket {bucket}"));
                tracer.finish(label, Outcome::NotFound)
            }
        }
    }

    /// Trace redistributing every entry over `capacity` buckets.
    pub fn trace_resize(&self, capacity: usize) -> Result<Timeline<Self>> {
        let mut tracer = Tracer::new(self.clone());
        *tracer.model_mut() = Self::new(capacity, self.function)?;
        tracer.pass(format!(
            "Allocate {capacity} buckets (was {})",
            self.capacity()
        ));

        for (from, chain) in self.buckets.iter().enumerate() {
            for entry in chain.iter() {
                let to = tracer.model().bucket_of(&entry.key);
                let position = tracer.model().buckets[to].len();
                tracer.model_mut().insert(entry.key.clone(), entry.value.clone());
                tracer.record(
                    StepKind::Move,
                    vec![to, position],
                    format!("Rehash {:?} from bucket {from} to bucket {to}", entry.key),
                );
            }
        }

        Ok(tracer.finish(
            format!("resize {} -> {capacity}", self.capacity()),
            Outcome::Completed,
        ))
    }

    pub fn trace_grow(&self) -> Result<Timeline<Self>> {
        self.trace_resize(self.capacity() * 2)
    }

    pub fn trace_shrink(&self) -> Result<Timeline<Self>> {
        self.trace_resize((self.capacity() / 2).max(1))
    }

    /// Record the hash and a visit for each node compared against `key`.
    ///
    /// Returns the tracer, the bucket, and the position of `key` in its
    /// chain if present.
    fn start_walk(&self, key: &K) -> (Tracer<Self>, usize, Option<usize>) {
        let mut tracer = Tracer::new(self.clone());
        let bucket = self.bucket_of(key);
        tracer.boundary(
            vec![bucket],
            format!(
                "{} hash of {key:?} is {}, bucket {bucket}",
                self.function,
                key.hash_code(self.function)
            ),
        );

        let mut found = None;
        for (position, entry) in self.buckets[bucket].iter().enumerate() {
            tracer.record(
                StepKind::Visit,
                vec![bucket, position],
                format!("Node {position} holds {:?}", entry.key),
            );
            if entry.key == *key {
                found = Some(position);
                break;
            }
        }
        (tracer, bucket, found)
    }
}

impl<K: HashKey> ChainedSet<K> {
    pub fn trace_add(&self, key: K) -> Timeline<Self> {
        self.trace_insert(key, ())
    }

    /// Add `key`; `false` if it was already present.
    pub fn add(&mut self, key: K) -> bool {
        matches!(self.insert(key, ()), Outcome::Inserted { .. })
    }
}
