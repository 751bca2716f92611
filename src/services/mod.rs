pub mod content;
pub mod intake;
pub mod submission;
