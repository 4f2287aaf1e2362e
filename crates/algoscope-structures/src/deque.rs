//! Double-ended queue. Index 0 is the front.

use std::collections::VecDeque;
use std::fmt::{self, Debug};

use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use serde::{Deserialize, Serialize};

const NAME: &str = "deque";

/// Which end of a [`Deque`] an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    Front,
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Front => f.write_str("front"),
            End::Back => f.write_str("back"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn peek(&self, end: End) -> Option<&T> {
        match end {
            End::Front => self.items.front(),
            End::Back => self.items.back(),
        }
    }

    pub fn push(&mut self, end: End, value: T) {
        match end {
            End::Front => self.items.push_front(value),
            End::Back => self.items.push_back(value),
        }
    }

    pub fn pop(&mut self, end: End) -> Result<T> {
        match end {
            End::Front => self.items.pop_front(),
            End::Back => self.items.pop_back(),
        }
        .ok_or(Error::Underflow { structure: NAME })
    }

    /// Position of the element at `end`, if any.
    fn position(&self, end: End) -> Result<usize> {
        match (end, self.items.len()) {
            (_, 0) => Err(Error::Underflow { structure: NAME }),
            (End::Front, _) => Ok(0),
            (End::Back, len) => Ok(len - 1),
        }
    }
}

impl<T: Clone + Debug> Deque<T> {
    pub fn trace_push(&self, end: End, value: T) -> Timeline<Self> {
        let mut tracer = Tracer::new(self.clone());
        tracer.model_mut().push(end, value.clone());
        let index = match end {
            End::Front => 0,
            End::Back => self.len(),
        };
        tracer.record(StepKind::Insert, vec![index], format!("Push {value:?} at the {end}"));
        tracer.finish(format!("push {end} {value:?}"), Outcome::Inserted { index })
    }

    pub fn trace_pop(&self, end: End) -> Result<Timeline<Self>> {
        let index = self.position(end)?;
        let mut tracer = Tracer::new(self.clone());
        tracer.boundary(vec![index], format!("{end} is {:?}", self.items[index]));
        let value = tracer.model_mut().pop(end)?;
        tracer.record(StepKind::Remove, vec![index], format!("Pop {value:?} from the {end}"));
        Ok(tracer.finish(format!("pop {end}"), Outcome::Removed { index }))
    }

    pub fn trace_peek(&self, end: End) -> Result<Timeline<Self>> {
        let index = self.position(end)?;
        let mut tracer = Tracer::new(self.clone());
        tracer.mark(vec![index], format!("{end} is {:?}", self.items[index]));
        Ok(tracer.finish(format!("peek {end}"), Outcome::Found { index }))
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
