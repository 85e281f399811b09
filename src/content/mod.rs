//! Literal catalog data rendered by the pages and served by the JSON API.

mod commands;
mod docs;
mod home;
mod support;

pub use commands::*;
pub use docs::*;
pub use home::*;
pub use support::*;
