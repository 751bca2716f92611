use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn sent(response_time: &str) -> Self {
        Self {
            title: "Message Sent Successfully!".to_string(),
            description: format!(
                "Thank you for reaching out. I'll respond within {response_time}."
            ),
            variant: ToastVariant::Default,
        }
    }

    pub fn send_failed(phone: &str) -> Self {
        Self {
            title: "Error Sending Message".to_string(),
            description: format!("Please try again or call {phone} directly."),
            variant: ToastVariant::Destructive,
        }
    }
}

/// The notification surface the form writes outcomes to.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Keeps every toast it is handed. Clones share the same list.
#[derive(Clone, Default)]
pub struct ToastLog {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        tracing::debug!(title = %toast.title, "toast");
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}
