use serde::Serialize;

/// A navbar destination.
///
/// When `anchor` is set the link targets an element id on the page at `path`
/// rather than the top of the page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub anchor: Option<&'static str>,
}

impl NavLink {
    pub const fn page(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            anchor: None,
        }
    }

    pub const fn section(label: &'static str, path: &'static str, anchor: &'static str) -> Self {
        Self {
            label,
            path,
            anchor: Some(anchor),
        }
    }
}
