use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::toast::{Notifier, Toast};
use super::transport::ContactTransport;
use super::FormError;
use crate::config::AppConfig;
use crate::models::submission::WEBSITE_SOURCE;
use crate::models::{
    Concern, ConsultationRequest, ContactSubmission, PreferredContact, SessionType, Urgency,
};

const FIELDS: [&str; 10] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "preferredContact",
    "sessionType",
    "concerns",
    "urgency",
    "message",
    "consent",
];

/// A value coming from a form control: text inputs, selects and text areas
/// produce `Text`, checkboxes produce `Checked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

/// `Success` and `Failed` are not held; both settle straight back into
/// `Editing` once the toast has been raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent { id: String },
    Failed(FormError),
    /// Another submission was already in flight; nothing was sent.
    Busy,
    /// Required fields or consent missing; nothing was sent.
    Incomplete,
}

#[derive(Debug, Clone)]
pub struct FormSettings {
    pub fallback_phone: String,
    pub response_time: String,
    pub timeout: Duration,
    pub source: String,
}

impl FormSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            fallback_phone: config.practice_phone.clone(),
            response_time: config.response_time.clone(),
            timeout: Duration::from_secs(config.contact_timeout_secs),
            source: WEBSITE_SOURCE.to_string(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

struct FormInner {
    fields: ConsultationRequest,
    phase: FormPhase,
}

pub struct FormController {
    transport: Box<dyn ContactTransport>,
    notifier: Box<dyn Notifier>,
    settings: FormSettings,
    inner: Mutex<FormInner>,
}

impl FormController {
    pub fn new(
        transport: Box<dyn ContactTransport>,
        notifier: Box<dyn Notifier>,
        settings: FormSettings,
    ) -> Self {
        Self {
            transport,
            notifier,
            settings,
            inner: Mutex::new(FormInner {
                fields: ConsultationRequest::default(),
                phase: FormPhase::Editing,
            }),
        }
    }

    fn inner(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fields(&self) -> ConsultationRequest {
        self.inner().fields.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.inner().phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == FormPhase::Submitting
    }

    pub fn is_submittable(&self) -> bool {
        self.inner().fields.is_submittable()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        let inner = self.inner();
        inner.phase == FormPhase::Editing && inner.fields.is_submittable()
    }

    pub fn update_field(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let mut inner = self.inner();
        if inner.phase == FormPhase::Submitting {
            return Err(FormError::Busy);
        }
        apply_field(&mut inner.fields, name, value.into())
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (submission, in_flight) = {
            let mut inner = self.inner();
            if inner.phase == FormPhase::Submitting {
                tracing::debug!("submit ignored, request already in flight");
                return SubmitOutcome::Busy;
            }
            if !inner.fields.is_submittable() {
                return SubmitOutcome::Incomplete;
            }
            inner.phase = FormPhase::Submitting;
            (
                ContactSubmission::new(inner.fields.clone(), &self.settings.source),
                InFlight { inner: &self.inner },
            )
        };

        let result = match tokio::time::timeout(
            self.settings.timeout,
            self.transport.submit(&submission),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FormError::Timeout(self.settings.timeout)),
        };

        match result {
            Ok(receipt) => {
                self.inner().fields = ConsultationRequest::default();
                drop(in_flight);
                tracing::info!(id = %receipt.id, "consultation request sent");
                self.notifier.notify(Toast::sent(&self.settings.response_time));
                SubmitOutcome::Sent { id: receipt.id }
            }
            Err(e) => {
                drop(in_flight);
                tracing::warn!(error = %e, "consultation request failed");
                self.notifier.notify(Toast::send_failed(&self.settings.fallback_phone));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Returns the form to `Editing` when dropped, so a submit future that is
/// cancelled mid-flight cannot leave the form stuck in `Submitting`.
/// Fields are left as they are.
struct InFlight<'a> {
    inner: &'a Mutex<FormInner>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .phase = FormPhase::Editing;
    }
}

fn parse_choice<T>(
    field: &'static str,
    value: String,
    parse: fn(&str) -> Option<T>,
) -> Result<T, FormError> {
    parse(&value).ok_or(FormError::InvalidValue { field, value })
}

fn apply_field(
    fields: &mut ConsultationRequest,
    name: &str,
    value: FieldValue,
) -> Result<(), FormError> {
    let field = FIELDS
        .into_iter()
        .find(|f| *f == name)
        .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

    match (field, value) {
        ("consent", FieldValue::Checked(checked)) => fields.consent = checked,
        ("consent", FieldValue::Text(_)) => {
            return Err(FormError::FieldType {
                field,
                expected: "checkbox",
            })
        }
        (_, FieldValue::Checked(_)) => {
            return Err(FormError::FieldType {
                field,
                expected: "text",
            })
        }
        ("firstName", FieldValue::Text(v)) => fields.first_name = v,
        ("lastName", FieldValue::Text(v)) => fields.last_name = v,
        ("email", FieldValue::Text(v)) => fields.email = v,
        ("phone", FieldValue::Text(v)) => fields.phone = v,
        ("message", FieldValue::Text(v)) => fields.message = v,
        ("preferredContact", FieldValue::Text(v)) => {
            fields.preferred_contact = parse_choice(field, v, PreferredContact::parse)?
        }
        ("sessionType", FieldValue::Text(v)) => {
            fields.session_type = parse_choice(field, v, SessionType::parse)?
        }
        ("concerns", FieldValue::Text(v)) => {
            fields.concerns = parse_choice(field, v, Concern::parse)?
        }
        ("urgency", FieldValue::Text(v)) => {
            fields.urgency = parse_choice(field, v, Urgency::parse)?
        }
        (other, FieldValue::Text(_)) => return Err(FormError::UnknownField(other.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::client::toast::{ToastLog, ToastVariant};
    use crate::models::SubmissionReceipt;

    #[derive(Clone, Copy)]
    enum Behavior {
        Accept,
        Reject(u16),
        Unreachable,
        Hang,
    }

    #[derive(Clone)]
    struct ScriptedTransport {
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
        last: Arc<Mutex<Option<ContactSubmission>>>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedTransport {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                calls: Arc::new(AtomicUsize::new(0)),
                last: Arc::new(Mutex::new(None)),
                gate: None,
            }
        }

        fn gated(behavior: Behavior, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(behavior)
            }
        }
    }

    #[async_trait]
    impl ContactTransport for ScriptedTransport {
        async fn submit(
            &self,
            submission: &ContactSubmission,
        ) -> Result<SubmissionReceipt, FormError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(submission.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.behavior {
                Behavior::Accept => Ok(SubmissionReceipt::accepted(format!("sub_test_{n}"))),
                Behavior::Reject(status) => Err(FormError::Rejected { status }),
                Behavior::Unreachable => Err(FormError::Transport("connection refused".into())),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Err(FormError::Transport("unreachable".into()))
                }
            }
        }
    }

    fn controller(transport: ScriptedTransport, toasts: &ToastLog) -> FormController {
        FormController::new(
            Box::new(transport),
            Box::new(toasts.clone()),
            FormSettings::default(),
        )
    }

    fn fill_scenario_a(form: &FormController) {
        form.update_field("firstName", "Jane").unwrap();
        form.update_field("lastName", "Doe").unwrap();
        form.update_field("email", "jane@example.com").unwrap();
        form.update_field("message", "Looking for help with anxiety").unwrap();
        form.update_field("consent", true).unwrap();
    }

    #[test]
    fn test_update_field_stores_values() {
        let toasts = ToastLog::new();
        let form = controller(ScriptedTransport::new(Behavior::Accept), &toasts);

        form.update_field("phone", "(804) 555-0100").unwrap();
        form.update_field("sessionType", "in-person").unwrap();
        form.update_field("concerns", "grief").unwrap();
        form.update_field("urgency", "soon").unwrap();
        form.update_field("preferredContact", "text").unwrap();
        form.update_field("consent", true).unwrap();

        let fields = form.fields();
        assert_eq!(fields.phone, "(804) 555-0100");
        assert_eq!(fields.session_type, SessionType::InPerson);
        assert_eq!(fields.concerns, Concern::Grief);
        assert_eq!(fields.urgency, Urgency::Soon);
        assert_eq!(fields.preferred_contact, PreferredContact::Text);
        assert!(fields.consent);
    }

    #[test]
    fn test_update_field_rejects_bad_input() {
        let toasts = ToastLog::new();
        let form = controller(ScriptedTransport::new(Behavior::Accept), &toasts);

        assert!(matches!(
            form.update_field("middleName", "Q"),
            Err(FormError::UnknownField(_))
        ));
        assert!(matches!(
            form.update_field("consent", "yes"),
            Err(FormError::FieldType { field: "consent", .. })
        ));
        assert!(matches!(
            form.update_field("email", true),
            Err(FormError::FieldType { field: "email", .. })
        ));
        assert!(matches!(
            form.update_field("sessionType", "phone-call"),
            Err(FormError::InvalidValue { field: "sessionType", .. })
        ));
        assert_eq!(form.fields(), ConsultationRequest::default());
    }

    #[test]
    fn test_can_submit_tracks_required_fields() {
        let toasts = ToastLog::new();
        let form = controller(ScriptedTransport::new(Behavior::Accept), &toasts);
        assert!(!form.can_submit());

        fill_scenario_a(&form);
        assert!(form.is_submittable());
        assert!(form.can_submit());

        form.update_field("consent", false).unwrap();
        assert!(!form.can_submit());

        form.update_field("consent", true).unwrap();
        form.update_field("firstName", "   ").unwrap();
        assert!(form.is_submittable());
        form.update_field("firstName", "").unwrap();
        assert!(!form.is_submittable());
    }

    #[tokio::test]
    async fn test_incomplete_form_never_dispatches() {
        let toasts = ToastLog::new();
        let transport = ScriptedTransport::new(Behavior::Accept);
        let calls = transport.calls.clone();
        let form = controller(transport, &toasts);

        form.update_field("lastName", "Doe").unwrap();
        form.update_field("email", "jane@example.com").unwrap();
        form.update_field("message", "test").unwrap();
        form.update_field("consent", true).unwrap();

        assert!(matches!(form.submit().await, SubmitOutcome::Incomplete));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_success_resets_fields_and_toasts() {
        let toasts = ToastLog::new();
        let transport = ScriptedTransport::new(Behavior::Accept);
        let last = transport.last.clone();
        let form = controller(transport, &toasts);
        fill_scenario_a(&form);
        form.update_field("urgency", "urgent").unwrap();

        match form.submit().await {
            SubmitOutcome::Sent { id } => assert!(!id.is_empty()),
            other => panic!("expected Sent, got {other:?}"),
        }

        assert_eq!(form.fields(), ConsultationRequest::default());
        assert_eq!(form.phase(), FormPhase::Editing);

        let toast = toasts.last().unwrap();
        assert_eq!(toast.title, "Message Sent Successfully!");
        assert_eq!(toast.variant, ToastVariant::Default);
        assert!(toast.description.contains("1-2 business days"));

        let sent = last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.source, "website-contact-form");
        assert_eq!(sent.request.first_name, "Jane");
        assert_eq!(sent.request.urgency, Urgency::Urgent);
    }

    #[tokio::test]
    async fn test_rejection_preserves_fields() {
        let toasts = ToastLog::new();
        let form = controller(ScriptedTransport::new(Behavior::Reject(400)), &toasts);
        fill_scenario_a(&form);
        form.update_field("phone", "555").unwrap();
        let before = form.fields();

        assert!(matches!(
            form.submit().await,
            SubmitOutcome::Failed(FormError::Rejected { status: 400 })
        ));
        assert_eq!(form.fields(), before);
        assert_eq!(form.phase(), FormPhase::Editing);

        let toast = toasts.last().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert!(toast.description.contains("(804) 207-8414"));
    }

    #[tokio::test]
    async fn test_transport_failure_then_manual_retry() {
        let toasts = ToastLog::new();
        let transport = ScriptedTransport::new(Behavior::Unreachable);
        let calls = transport.calls.clone();
        let form = controller(transport, &toasts);
        fill_scenario_a(&form);

        assert!(matches!(form.submit().await, SubmitOutcome::Failed(_)));
        assert!(matches!(form.submit().await, SubmitOutcome::Failed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(toasts.toasts().len(), 2);
        assert!(form.is_submittable());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let toasts = ToastLog::new();
        let gate = Arc::new(Notify::new());
        let transport = ScriptedTransport::gated(Behavior::Accept, gate.clone());
        let calls = transport.calls.clone();
        let form = Arc::new(controller(transport, &toasts));
        fill_scenario_a(&form);

        let first = {
            let form = form.clone();
            tokio::spawn(async move { form.submit().await })
        };
        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert!(matches!(form.submit().await, SubmitOutcome::Busy));
        assert!(matches!(
            form.update_field("firstName", "Janet"),
            Err(FormError::Busy)
        ));

        gate.notify_one();
        assert!(matches!(
            first.await.unwrap(),
            SubmitOutcome::Sent { .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(toasts.toasts().len(), 1);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_cancelled_submit_returns_to_editing() {
        let toasts = ToastLog::new();
        let gate = Arc::new(Notify::new());
        let transport = ScriptedTransport::gated(Behavior::Accept, gate);
        let calls = transport.calls.clone();
        let form = Arc::new(controller(transport, &toasts));
        fill_scenario_a(&form);
        let before = form.fields();

        let pending = {
            let form = form.clone();
            tokio::spawn(async move { form.submit().await })
        };
        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(form.is_loading());

        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());

        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.can_submit());
        assert_eq!(form.fields(), before);
        assert!(toasts.toasts().is_empty());
        form.update_field("phone", "(804) 555-0100").unwrap();
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let toasts = ToastLog::new();
        let settings = FormSettings {
            timeout: Duration::from_millis(50),
            ..FormSettings::default()
        };
        let form = FormController::new(
            Box::new(ScriptedTransport::new(Behavior::Hang)),
            Box::new(toasts.clone()),
            settings,
        );
        fill_scenario_a(&form);
        let before = form.fields();

        assert!(matches!(
            form.submit().await,
            SubmitOutcome::Failed(FormError::Timeout(_))
        ));
        assert_eq!(form.fields(), before);
        assert!(!form.is_loading());
        assert_eq!(toasts.last().unwrap().title, "Error Sending Message");
    }
}
