use serde::{Deserialize, Deserializer, Serialize};

/// One set of answers, aligned to the question list by position.
///
/// A missing or `null` answer list decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<i64>,
}

impl Submission {
    pub fn new(answers: Vec<i64>) -> Self {
        Self { answers }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}
