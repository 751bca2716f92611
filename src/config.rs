use std::env;

use crate::models::Theme;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub practice_name: String,
    pub practice_phone: String,
    pub response_time: String,
    pub theme: Theme,
    pub contact_timeout_secs: u64,
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            practice_name: env::var("PRACTICE_NAME")
                .unwrap_or_else(|_| "Seek, Strive & Thrive Counseling".to_string()),
            practice_phone: env::var("PRACTICE_PHONE")
                .unwrap_or_else(|_| "(804) 207-8414".to_string()),
            response_time: env::var("RESPONSE_TIME")
                .unwrap_or_else(|_| "1-2 business days".to_string()),
            theme: Theme::resolve(env::var("SITE_THEME").ok().as_deref()),
            contact_timeout_secs: env::var("CONTACT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(8),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|o| !o.is_empty()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            practice_name: "Seek, Strive & Thrive Counseling".to_string(),
            practice_phone: "(804) 207-8414".to_string(),
            response_time: "1-2 business days".to_string(),
            theme: Theme::default(),
            contact_timeout_secs: 8,
            allowed_origin: None,
        }
    }
}
