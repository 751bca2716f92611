pub mod consultation;
pub mod content;
pub mod submission;
pub mod theme;

pub use consultation::{Concern, ConsultationRequest, PreferredContact, SessionType, Urgency};
pub use content::{LabeledEntry, LabeledList};
pub use submission::{AcceptedSubmission, ContactSubmission, SubmissionReceipt};
pub use theme::Theme;
