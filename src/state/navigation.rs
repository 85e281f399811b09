//! Page navigation with deferred scrolling to in-page anchors.
//!
//! A request to reach an anchor on another page is split in two: the route
//! change happens first and the scroll is parked until the router reports
//! that the new page has committed. There is no timer between the two.

use crate::models::NavLink;

use super::NavbarState;

/// What the client should do in response to a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Already on the right page; scroll to the element with this id.
    ScrollTo(&'static str),
    /// Change page. If `pending_scroll` is set, scroll to it once the new
    /// page has committed.
    Navigate {
        path: &'static str,
        pending_scroll: Option<&'static str>,
    },
}

impl NavAction {
    /// The link target that performs this action in a plain HTML page.
    pub fn href(&self) -> String {
        match self {
            Self::ScrollTo(anchor) => format!("#{}", anchor),
            Self::Navigate {
                path,
                pending_scroll: Some(anchor),
            } => format!("{}#{}", path, anchor),
            Self::Navigate {
                path,
                pending_scroll: None,
            } => path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingScroll {
    path: &'static str,
    anchor: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    pending: Option<PendingScroll>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a click on `link` while `current_path` is displayed.
    ///
    /// Any navigation closes the mobile drawer and replaces a previously
    /// pending scroll.
    pub fn navigate(
        &mut self,
        current_path: &str,
        link: &NavLink,
        navbar: &mut NavbarState,
    ) -> NavAction {
        navbar.close_mobile_menu();

        match link.anchor {
            Some(anchor) if current_path == link.path => {
                self.pending = None;
                NavAction::ScrollTo(anchor)
            }
            Some(anchor) => {
                self.pending = Some(PendingScroll {
                    path: link.path,
                    anchor,
                });
                NavAction::Navigate {
                    path: link.path,
                    pending_scroll: Some(anchor),
                }
            }
            None => {
                self.pending = None;
                NavAction::Navigate {
                    path: link.path,
                    pending_scroll: None,
                }
            }
        }
    }

    pub fn pending_scroll(&self) -> Option<&'static str> {
        self.pending.map(|p| p.anchor)
    }

    /// Signal that the router finished switching to `path`.
    ///
    /// Returns the anchor to scroll to if a scroll was waiting on this page.
    /// A commit for any other path discards the pending scroll.
    pub fn route_committed(&mut self, path: &str) -> Option<&'static str> {
        match self.pending.take() {
            Some(pending) if pending.path == path => Some(pending.anchor),
            Some(pending) => {
                tracing::debug!(
                    "Dropping scroll to #{} after route changed to {}",
                    pending.anchor,
                    path
                );
                None
            }
            None => None,
        }
    }
}
