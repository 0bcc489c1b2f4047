mod course;
mod option;
mod question;

pub use course::Course;
pub use option::AnswerOption;
pub use question::Question;
