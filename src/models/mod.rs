//! Descriptor types for the site's static content.
//!
//! Every value here is built once from literal data in [`crate::content`]
//! and never mutated. The types derive `Serialize` so the JSON API can hand
//! them out unchanged.
//!
//! - [`CommandDescriptor`]: one bot slash-command, its options and examples.
//! - [`Feature`]: a product feature card on the home page.
//! - [`FaqEntry`] and [`TroubleshootingEntry`]: support page content.
//! - [`NavLink`]: a navbar destination, optionally bound to an in-page anchor.

mod command;
mod docs;
mod feature;
mod nav;
mod support;

pub use command::*;
pub use docs::*;
pub use feature::*;
pub use nav::*;
pub use support::*;
