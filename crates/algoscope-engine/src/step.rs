//! Steps: the observable sub-operations an algorithm run is made of.

use serde::{Deserialize, Serialize};

/// What kind of sub-operation a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Two elements (or an element and a held value) were compared
    Compare,
    /// Two elements exchanged positions
    Swap,
    /// A value was written into a position (shift, merge write-back, bucket collect)
    Move,
    /// A range boundary, pivot or running minimum changed
    Boundary,
    /// A new pass over the collection started
    Pass,
    /// An element was added to the structure
    Insert,
    /// An element was taken out of the structure
    Remove,
    /// A hash table slot or bucket was inspected
    Probe,
    /// A linked node was walked over
    Visit,
    /// A position was marked as final (settled, found)
    Mark,
}

impl StepKind {
    /// Short lowercase name used in status text and logs.
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Move => "move",
            StepKind::Boundary => "boundary",
            StepKind::Pass => "pass",
            StepKind::Insert => "insert",
            StepKind::Remove => "remove",
            StepKind::Probe => "probe",
            StepKind::Visit => "visit",
            StepKind::Mark => "mark",
        }
    }
}

/// One recorded step of a run.
///
/// `snapshot` is the full model as it stands after the step took effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<S> {
    pub kind: StepKind,
    pub indices: Vec<usize>,
    pub snapshot: S,
    pub description: String,
}

impl<S> Step<S> {
    /// Create a step.
    pub fn new(kind: StepKind, indices: Vec<usize>, snapshot: S, description: String) -> Self {
        Self {
            kind,
            indices,
            snapshot,
            description,
        }
    }
}

/// How a finished operation turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The operation ran to the end (sorts, pushes, resizes)
    Completed,
    /// The target was found at `index`
    Found { index: usize },
    /// The target is not present
    NotFound,
    /// A new entry landed at `index`
    Inserted { index: usize },
    /// An existing entry at `index` had its value replaced
    Updated { index: usize },
    /// The entry at `index` was removed
    Removed { index: usize },
}

impl Outcome {
    /// Human-readable summary used as the final status line.
    pub fn describe(&self) -> String {
        match self {
            Outcome::Completed => "Done".to_string(),
            Outcome::Found { index } => format!("Found at index {index}"),
            Outcome::NotFound => "Not found".to_string(),
            Outcome::Inserted { index } => format!("Inserted at index {index}"),
            Outcome::Updated { index } => format!("Updated index {index}"),
            Outcome::Removed { index } => format!("Removed index {index}"),
        }
    }

    /// Index the outcome points at, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Outcome::Found { index }
            | Outcome::Inserted { index }
            | Outcome::Updated { index }
            | Outcome::Removed { index } => Some(*index),
            Outcome::Completed | Outcome::NotFound => None,
        }
    }
}
