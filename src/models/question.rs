use serde::{Deserialize, Serialize};

use super::AnswerOption;

/// A single-answer multiple-choice prompt.
///
/// Options are kept in display order. Once a question has been through
/// catalog validation it has at least two options and exactly one of them
/// is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// The correct option. Always `Some` for a question taken from a
    /// validated catalog.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.correct)
    }

    pub fn option(&self, id: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Whether choosing the option with `option_id` answers this question
    /// correctly. Unknown ids are never correct.
    pub fn is_correct(&self, option_id: u32) -> bool {
        self.option(option_id).is_some_and(|o| o.correct)
    }

    pub(crate) fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }
}
