pub mod submission;

pub use submission::{Answers, NewSubmission, Submission};
