use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Growth,
    Serene,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Growth, Theme::Serene];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Growth => "growth",
            Theme::Serene => "serene",
        }
    }

    /// Resolves a stored preference. Anything other than a known theme name,
    /// including a missing value, falls back to the default.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored.map(str::trim) {
            Some("serene") => Theme::Serene,
            Some("growth") => Theme::Growth,
            Some(other) => {
                tracing::debug!(value = %other, "unknown theme preference, using default");
                Theme::default()
            }
            None => Theme::default(),
        }
    }
}
