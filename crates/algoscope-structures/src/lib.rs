//! Algoscope Structures
//!
//! Linear data structures whose operations can be traced step by step:
//!
//! - [`Stack`]: push/pop/peek at the top, optionally bounded
//! - [`Queue`]: enqueue at the back, dequeue from the front
//! - [`Deque`]: push/pop at either [`End`]
//! - [`SinglyLinkedList`]: positional insert/remove and search by value
//!
//! Every `trace_*` method works on a copy and returns a [`Timeline`] whose
//! `result` is the structure after the operation. Invalid operations
//! (popping an empty stack, an out-of-range position) return an error
//! before anything is recorded.
//!
//! [`Timeline`]: algoscope_engine::Timeline

mod deque;
mod linked_list;
mod queue;
mod stack;

pub use deque::{Deque, End};
pub use linked_list::{Iter, SinglyLinkedList};
pub use queue::Queue;
pub use stack::Stack;
