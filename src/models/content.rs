use serde::Serialize;

/// One row of a content table: a card, an accordion item or a slide.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabeledEntry {
    pub label: &'static str,
    pub detail: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
}

impl LabeledEntry {
    pub const fn new(label: &'static str, detail: &'static str) -> Self {
        Self {
            label,
            detail,
            link: None,
            tag: None,
        }
    }

    pub const fn with_link(mut self, link: &'static str) -> Self {
        self.link = Some(link);
        self
    }

    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledList {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: &'static [LabeledEntry],
}
