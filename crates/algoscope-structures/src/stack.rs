//! LIFO stack backed by a vector. Index `len - 1` is the top.

use std::fmt::Debug;

use algoscope_engine::{Error, Outcome, Result, StepKind, Timeline, Tracer};
use serde::{Deserialize, Serialize};

const NAME: &str = "stack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Stack<T> {
    /// Unbounded stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// Stack that overflows once it holds `capacity` items.
    pub fn bounded(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.items.len() >= capacity)
    }

    /// Items from bottom to top.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.check_room()?;
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow { structure: NAME })
    }

    fn check_room(&self) -> Result<()> {
        match self.capacity {
            Some(capacity) if self.items.len() >= capacity => {
                Err(Error::Overflow { structure: NAME, capacity })
            }
            _ => Ok(()),
        }
    }

    fn top(&self) -> Result<usize> {
        self.items
            .len()
            .checked_sub(1)
            .ok_or(Error::Underflow { structure: NAME })
    }
}

impl<T: Clone + Debug> Stack<T> {
    pub fn trace_push(&self, value: T) -> Result<Timeline<Self>> {
        self.check_room()?;
        let mut tracer = Tracer::new(self.clone());
        let index = self.len();
        tracer.model_mut().items.push(value.clone());
        tracer.record(StepKind::Insert, vec![index], format!("Push {value:?} onto the top"));
        Ok(tracer.finish(format!("push {value:?}"), Outcome::Inserted { index }))
    }

    pub fn trace_pop(&self) -> Result<Timeline<Self>> {
        let index = self.top()?;
        let mut tracer = Tracer::new(self.clone());
        tracer.boundary(vec![index], format!("Top is {:?}", self.items[index]));
        let value = tracer.model_mut().pop()?;
        tracer.record(StepKind::Remove, vec![index], format!("Pop {value:?}"));
        Ok(tracer.finish("pop", Outcome::Removed { index }))
    }

    pub fn trace_peek(&self) -> Result<Timeline<Self>> {
        let index = self.top()?;
        let mut tracer = Tracer::new(self.clone());
        tracer.mark(vec![index], format!("Top is {:?}", self.items[index]));
        Ok(tracer.finish("peek", Outcome::Found { index }))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert_eq!(stack.pop(), Err(Error::Underflow { structure: "stack" }));
    }

    #[test]
    fn bounded_stack_overflows() {
        let mut stack = Stack::bounded(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(stack.is_full());
        assert_eq!(
            stack.push('c'),
            Err(Error::Overflow { structure: "stack", capacity: 2 })
        );
        assert_eq!(stack.items(), &['a', 'b']);
        assert_eq!(Stack::<u8>::bounded(0), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn traced_push_and_pop() {
        let stack: Stack<i64> = [1, 2].into_iter().collect();

        let pushed = stack.trace_push(3).unwrap();
        assert_eq!(pushed.outcome, Outcome::Inserted { index: 2 });
        assert_eq!(pushed.result.items(), &[1, 2, 3]);

        let popped = stack.trace_pop().unwrap();
        assert_eq!(popped.outcome, Outcome::Removed { index: 1 });
        assert_eq!(popped.result.items(), &[1]);
        assert_eq!(popped.count(StepKind::Remove), 1);
    }

    #[test]
    fn traced_ops_on_empty_stack_underflow() {
        let stack = Stack::<i64>::new();
        assert!(matches!(stack.trace_pop(), Err(Error::Underflow { .. })));
        assert!(matches!(stack.trace_peek(), Err(Error::Underflow { .. })));
    }

    #[test]
    fn peek_does_not_mutate() {
        let stack: Stack<i64> = [4, 5].into_iter().collect();
        let peeked = stack.trace_peek().unwrap();
        assert_eq!(peeked.outcome, Outcome::Found { index: 1 });
        assert_eq!(peeked.result, stack);
    }
}
