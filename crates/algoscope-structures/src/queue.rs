//! FIFO queue with an optional capacity. Index 0 is the front.

use std::collections::VecDeque;
use std::fmt::Debug;

use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use serde::{Deserialize, Serialize};

const NAME: &str = "queue";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            capacity: None,
        }
    }

    /// Queue that overflows once it holds `capacity` items.
    pub fn bounded(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.check_room()?;
        self.items.push_back(value);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(Error::Underflow { structure: NAME })
    }

    fn check_room(&self) -> Result<()> {
        match self.capacity {
            Some(capacity) if self.items.len() >= capacity => {
                Err(Error::Overflow { structure: NAME, capacity })
            }
            _ => Ok(()),
        }
    }

    fn front(&self) -> Result<&T> {
        self.items.front().ok_or(Error::Underflow { structure: NAME })
    }
}

impl<T: Clone + Debug> Queue<T> {
    pub fn trace_enqueue(&self, value: T) -> Result<Timeline<Self>> {
        self.check_room()?;
        let mut tracer = Tracer::new(self.clone());
        let index = self.len();
        tracer.model_mut().items.push_back(value.clone());
        tracer.record(StepKind::Insert, vec![index], format!("Enqueue {value:?} at the back"));
        Ok(tracer.finish(format!("enqueue {value:?}"), Outcome::Inserted { index }))
    }

    pub fn trace_dequeue(&self) -> Result<Timeline<Self>> {
        let front = self.front()?;
        let mut tracer = Tracer::new(self.clone());
        tracer.boundary(vec![0], format!("Front is {front:?}"));
        let value = tracer.model_mut().dequeue()?;
        tracer.record(StepKind::Remove, vec![0], format!("Dequeue {value:?}"));
        Ok(tracer.finish("dequeue", Outcome::Removed { index: 0 }))
    }

    pub fn trace_peek(&self) -> Result<Timeline<Self>> {
        let front = self.front()?;
        let mut tracer = Tracer::new(self.clone());
        tracer.mark(vec![0], format!("Front is {front:?}"));
        Ok(tracer.finish("peek", Outcome::Found { index: 0 }))
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            capacity: None,
        }
    }
}
