use serde::Serialize;

/// A product feature card shown on the home page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Short bullet points listed under the description.
    pub details: Vec<&'static str>,
}

/// A headline number, e.g. "50k+ Active Users".
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}
