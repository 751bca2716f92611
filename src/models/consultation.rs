use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
    Text,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
            PreferredContact::Text => "text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "email" => Some(PreferredContact::Email),
            "phone" => Some(PreferredContact::Phone),
            "text" => Some(PreferredContact::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    #[default]
    NotSure,
    Telehealth,
    InPerson,
    Either,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::NotSure => "not-sure",
            SessionType::Telehealth => "telehealth",
            SessionType::InPerson => "in-person",
            SessionType::Either => "either",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not-sure" => Some(SessionType::NotSure),
            "telehealth" => Some(SessionType::Telehealth),
            "in-person" => Some(SessionType::InPerson),
            "either" => Some(SessionType::Either),
            _ => None,
        }
    }
}

/// Presenting concern picked from the form's drop-down. `Unspecified` is the
/// empty "Select primary concern" option and goes over the wire as `""`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Concern {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Anxiety,
    Depression,
    Trauma,
    Grief,
    Relationships,
    LifeTransitions,
    Family,
    Cultural,
    Other,
}

impl Concern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Unspecified => "",
            Concern::Anxiety => "anxiety",
            Concern::Depression => "depression",
            Concern::Trauma => "trauma",
            Concern::Grief => "grief",
            Concern::Relationships => "relationships",
            Concern::LifeTransitions => "life-transitions",
            Concern::Family => "family",
            Concern::Cultural => "cultural",
            Concern::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Concern::Unspecified),
            "anxiety" => Some(Concern::Anxiety),
            "depression" => Some(Concern::Depression),
            "trauma" => Some(Concern::Trauma),
            "grief" => Some(Concern::Grief),
            "relationships" => Some(Concern::Relationships),
            "life-transitions" => Some(Concern::LifeTransitions),
            "family" => Some(Concern::Family),
            "cultural" => Some(Concern::Cultural),
            "other" => Some(Concern::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    #[default]
    Routine,
    Soon,
    Urgent,
    Flexible,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Soon => "soon",
            Urgency::Urgent => "urgent",
            Urgency::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "routine" => Some(Urgency::Routine),
            "soon" => Some(Urgency::Soon),
            "urgent" => Some(Urgency::Urgent),
            "flexible" => Some(Urgency::Flexible),
            _ => None,
        }
    }
}

/// Field state of the consultation form. `Default` is the blank form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: PreferredContact,
    pub session_type: SessionType,
    pub concerns: Concern,
    pub urgency: Urgency,
    pub message: String,
    pub consent: bool,
}

impl ConsultationRequest {
    /// Names (wire form) of required fields that are empty, plus `consent`
    /// when it has not been given.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                missing.push(name);
            }
        }
        if !self.consent {
            missing.push("consent");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }

}
