//! Page-local UI selection state.
//!
//! Each value lives for a single page view. The server rebuilds it from the
//! query string on every request and renders links that encode the state a
//! click would lead to.

mod accordion;
mod filter;
mod navbar;
mod navigation;

pub use accordion::*;
pub use filter::*;
pub use navbar::*;
pub use navigation::*;
