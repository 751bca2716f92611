//! Client-side pieces of the site: the consultation form controller and the
//! small state machines the pages drive (theme preference, testimonial
//! carousel).

pub mod carousel;
pub mod form;
pub mod theme;
pub mod toast;
pub mod transport;

pub use form::{FieldValue, FormController, FormPhase, FormSettings, SubmitOutcome};
pub use toast::{Notifier, Toast, ToastLog, ToastVariant};
pub use transport::{ContactTransport, HttpTransport};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    Busy,

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("field {field} expects a {expected} value")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("contact endpoint returned status {status}")]
    Rejected { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no response within {0:?}")]
    Timeout(std::time::Duration),
}
