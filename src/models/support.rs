use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A known problem and the ordered steps that resolve it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TroubleshootingEntry {
    pub title: &'static str,
    pub severity: Severity,
    pub steps: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A place users can go for help.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SupportChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Button label.
    pub action: &'static str,
    pub link: String,
}
