use serde::{Deserialize, Serialize};

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    pub id: u32,
    pub option: String,
    pub correct: bool,
}
