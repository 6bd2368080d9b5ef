mod question;
mod score;
mod submission;

pub use question::Question;
pub use score::{Percentage, ScoreResult};
pub use submission::Submission;
