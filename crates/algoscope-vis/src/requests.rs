//! Request payloads shared by the REST and WebSocket handlers.

use algoscope_engine::input::{
    check_capacity, check_count, check_len, parse_collection, parse_value, random_collection,
};
use algoscope_engine::{Error, Speed};
use algoscope_structures::End;
use algoscope_search::SearchAlgorithm;
use algoscope_sort::SortAlgorithm;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// A number typed by a user. Text that is not a number counts as 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(i64),
    Text(String),
}

impl NumberInput {
    pub fn value(&self) -> i64 {
        match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(text) => parse_value(text),
        }
    }
}

/// New input for the array visualizer. The first field present wins:
/// `values`, then `text`, then `random`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadRequest {
    pub values: Option<Vec<i64>>,
    pub text: Option<String>,
    pub random: Option<RandomRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomRequest {
    pub len: usize,
    #[serde(default = "RandomRequest::default_min")]
    pub min: i64,
    #[serde(default = "RandomRequest::default_max")]
    pub max: i64,
    #[serde(default)]
    pub seed: u64,
}

impl RandomRequest {
    fn default_min() -> i64 {
        1
    }

    fn default_max() -> i64 {
        99
    }
}

impl LoadRequest {
    /// Build the collection this request describes, holding at most
    /// `max_len` values.
    pub fn collection(self, max_len: usize) -> ApiResult<Vec<i64>> {
        let values = if let Some(values) = self.values {
            values
        } else if let Some(text) = self.text {
            parse_collection(&text)
        } else if let Some(random) = self.random {
            check_count(random.len, max_len)?;
            random_collection(random.len, random.min, random.max, random.seed)?
        } else {
            return Err(ApiError::BadRequest(
                "expected `values`, `text` or `random`".into(),
            ));
        };
        check_len(&values, max_len)?;
        Ok(values)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    pub algorithm: SortAlgorithm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub algorithm: SearchAlgorithm,
    pub target: NumberInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeedRequest {
    pub speed: Speed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryRequest {
    pub key: String,
    pub value: NumberInput,
}

/// How to resize a hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResizeRequest {
    /// Double the capacity
    Grow,
    /// Halve the capacity
    Shrink,
    /// Exact capacity
    To { capacity: usize },
}

impl ResizeRequest {
    /// Target capacity for a table currently holding `current` slots.
    ///
    /// Targets above `max_capacity` are rejected with
    /// [`Error::InvalidCapacity`].
    pub fn capacity(&self, current: usize, max_capacity: usize) -> algoscope_engine::Result<usize> {
        let target = match self {
            ResizeRequest::Grow => current
                .checked_mul(2)
                .ok_or(Error::InvalidCapacity(current))?,
            ResizeRequest::Shrink => (current / 2).max(1),
            ResizeRequest::To { capacity } => *capacity,
        };
        check_capacity(target, max_capacity)?;
        Ok(target)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListInsertRequest {
    pub index: usize,
    pub value: NumberInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexRequest {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueRequest {
    pub value: NumberInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndRequest {
    pub end: End,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DequePushRequest {
    pub end: End,
    pub value: NumberInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_accepts_numbers_and_text() {
        let n: NumberInput = serde_json::from_str("23").unwrap();
        assert_eq!(n.value(), 23);
        let t: NumberInput = serde_json::from_str(r#""17""#).unwrap();
        assert_eq!(t.value(), 17);
        let garbage: NumberInput = serde_json::from_str(r#""seven""#).unwrap();
        assert_eq!(garbage.value(), 0);
    }

    #[test]
    fn load_prefers_explicit_values() {
        let req: LoadRequest =
            serde_json::from_str(r#"{"values":[3,1],"text":"9 9 9"}"#).unwrap();
        assert_eq!(req.collection(64).unwrap(), vec![3, 1]);

        let req: LoadRequest = serde_json::from_str(r#"{"text":"5, x, 2"}"#).unwrap();
        assert_eq!(req.collection(64).unwrap(), vec![5, 0, 2]);

        let req: LoadRequest =
            serde_json::from_str(r#"{"random":{"len":4,"seed":3}}"#).unwrap();
        let values = req.collection(64).unwrap();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| (1..=99).contains(v)));

        assert!(LoadRequest::default().collection(64).is_err());
    }

    #[test]
    fn load_length_is_capped_before_generating() {
        let req = LoadRequest {
            random: Some(RandomRequest {
                len: usize::MAX,
                min: 1,
                max: 99,
                seed: 0,
            }),
            ..LoadRequest::default()
        };
        assert!(matches!(
            req.collection(64),
            Err(ApiError::Rejected(Error::InvalidInput(_)))
        ));

        let req: LoadRequest = serde_json::from_str(r#"{"text":"1 2 3 4"}"#).unwrap();
        assert!(req.collection(3).is_err());
    }

    #[test]
    fn resize_modes() {
        let grow: ResizeRequest = serde_json::from_str(r#"{"mode":"grow"}"#).unwrap();
        assert_eq!(grow.capacity(10, 256), Ok(20));
        let shrink: ResizeRequest = serde_json::from_str(r#"{"mode":"shrink"}"#).unwrap();
        assert_eq!(shrink.capacity(1, 256), Ok(1));
        let exact: ResizeRequest =
            serde_json::from_str(r#"{"mode":"to","capacity":7}"#).unwrap();
        assert_eq!(exact.capacity(10, 256), Ok(7));
    }

    #[test]
    fn resize_targets_are_bounded() {
        assert_eq!(
            ResizeRequest::Grow.capacity(usize::MAX, usize::MAX),
            Err(Error::InvalidCapacity(usize::MAX))
        );
        assert_eq!(
            ResizeRequest::Grow.capacity(200, 256),
            Err(Error::InvalidCapacity(400))
        );
        assert_eq!(
            ResizeRequest::To { capacity: usize::MAX }.capacity(10, 256),
            Err(Error::InvalidCapacity(usize::MAX))
        );
        assert_eq!(
            ResizeRequest::To { capacity: 0 }.capacity(10, 256),
            Err(Error::InvalidCapacity(0))
        );
    }

    #[test]
    fn deque_requests_name_an_end() {
        let req: DequePushRequest =
            serde_json::from_str(r#"{"end":"front","value":4}"#).unwrap();
        assert_eq!(req.end, End::Front);
        let req: EndRequest = serde_json::from_str(r#"{"end":"back"}"#).unwrap();
        assert_eq!(req.end, End::Back);
    }

    #[test]
    fn algorithms_deserialize_by_id() {
        let req: SortRequest = serde_json::from_str(r#"{"algorithm":"quick"}"#).unwrap();
        assert_eq!(req.algorithm, SortAlgorithm::Quick);
        let req: SearchRequest =
            serde_json::from_str(r#"{"algorithm":"binary","target":"23"}"#).unwrap();
        assert_eq!(req.algorithm, SearchAlgorithm::Binary);
        assert_eq!(req.target.value(), 23);
    }
}
