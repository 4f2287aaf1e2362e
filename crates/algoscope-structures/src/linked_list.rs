//! Singly linked list with traced positional operations.

use std::fmt::{self, Debug};

use algoscope_engine::input::{check_index, check_insert_index};
use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list. Positions count from the head (0).
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at the head.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Value at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Mutable value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor.map(|node| &mut node.value)
    }

    /// Link a new head node.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Unlink the head node.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Append at the tail. Walks the whole list.
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Insert so that `value` ends up at position `index` (`0..=len`).
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_index(index, self.len)?;
        let cursor = self.link_at(index)?;
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Unlink and return the value at position `index` (`0..len`).
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        let len = self.len;
        let cursor = self.link_at(index)?;
        match cursor.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *cursor = next;
                self.len -= 1;
                Ok(value)
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Position of the first value matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The link slot that currently holds position `index`.
    fn link_at(&mut self, index: usize) -> Result<&mut Link<T>> {
        let len = self.len;
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(Error::IndexOutOfRange { index, len }),
            }
        }
        Ok(cursor)
    }
}

impl<T: Clone + Debug + PartialEq> SinglyLinkedList<T> {
    /// Trace inserting `value` at position `index`.
    pub fn trace_insert_at(&self, index: usize, value: T) -> Result<Timeline<Self>> {
        check_insert_index(index, self.len)?;
        let mut tracer = Tracer::new(self.clone());
        walk_to(&mut tracer, index);

        tracer.model_mut().insert_at(index, value.clone())?;
        tracer.record(
            StepKind::Insert,
            vec![index],
            format!("Link {value:?} at position {index}"),
        );
        Ok(tracer.finish(
            format!("insert {value:?} at {index}"),
            Outcome::Inserted { index },
        ))
    }

    /// Trace linking a new head.
    pub fn trace_push_front(&self, value: T) -> Result<Timeline<Self>> {
        self.trace_insert_at(0, value)
    }

    /// Trace appending at the tail.
    pub fn trace_push_back(&self, value: T) -> Result<Timeline<Self>> {
        self.trace_insert_at(self.len, value)
    }

    /// Trace unlinking the node at position `index`.
    pub fn trace_remove_at(&self, index: usize) -> Result<Timeline<Self>> {
        check_index(index, self.len)?;
        let mut tracer = Tracer::new(self.clone());
        walk_to(&mut tracer, index);

        let value = tracer.model_mut().remove_at(index)?;
        tracer.record(
            StepKind::Remove,
            vec![index],
            format!("Unlink {value:?} from position {index}"),
        );
        Ok(tracer.finish(
            format!("remove at {index}"),
            Outcome::Removed { index },
        ))
    }

    /// Trace a search from the head for the first node equal to `target`.
    pub fn trace_search(&self, target: &T) -> Timeline<Self> {
        let mut tracer = Tracer::new(self.clone());
        let label = format!("search for {target:?}");

        for (index, value) in self.iter().enumerate() {
            let found = value == target;
            tracer.record(StepKind::Visit, vec![index], format!("Visit node {index}"));
            tracer.record(
                StepKind::Compare,
                vec![index],
                format!("Compare {value:?} with {target:?}"),
            );
            if found {
                tracer.mark(vec![index], format!("Found {target:?} at position {index}"));
                return tracer.finish(label, Outcome::Found { index });
            }
        }

        tracer.mark(Vec::new(), format!("{target:?} is not in the list"));
        tracer.finish(label, Outcome::NotFound)
    }
}

/// Record a visit for every node before position `index`.
fn walk_to<T: Clone>(tracer: &mut Tracer<SinglyLinkedList<T>>, index: usize) {
    for position in 0..index {
        tracer.record(
            StepKind::Visit,
            vec![position],
            format!("Follow next pointer from node {position}"),
        );
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SinglyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}
