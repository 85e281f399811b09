//! Server-rendered HTML pages.
//!
//! Every page is a function from a [`PageContext`] plus its own selection
//! state to [`maud::Markup`]. Links that change selection state point at the
//! same page with the new state in the query string.

mod commands;
mod documentation;
mod home;
mod layout;
mod not_found;
mod support;
mod theme;

pub use commands::render as render_commands;
pub use documentation::render as render_documentation;
pub use home::render as render_home;
pub use not_found::render as render_not_found;
pub use support::render as render_support;
pub use theme::Theme;

use maud::Markup;

use crate::config::SiteConfig;
use crate::models::DocTab;
use crate::state::{Accordion, CommandQuery, FaqQuery, NavbarState};

/// A routable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Documentation,
    Commands,
    Support,
    NotFound,
}

impl Page {
    /// Pages with a fixed route, in navigation order.
    pub const ROUTED: [Page; 4] = [
        Self::Home,
        Self::Documentation,
        Self::Commands,
        Self::Support,
    ];

    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Documentation => Some("/documentation"),
            Self::Commands => Some("/commands"),
            Self::Support => Some("/support"),
            Self::NotFound => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "CrizModo - Discord Timer & Channel Management Bot",
            Self::Documentation => "Documentation - CrizModo",
            Self::Commands => "Commands - CrizModo",
            Self::Support => "Support - CrizModo",
            Self::NotFound => "Page Not Found - CrizModo",
        }
    }

    /// Render with every piece of selection state at its default.
    pub fn render_default(&self, config: &SiteConfig) -> Markup {
        let ctx = PageContext::new(config, self.path().unwrap_or("/404"));
        match self {
            Self::Home => home::render(&ctx),
            Self::Documentation => documentation::render(&ctx, DocTab::default()),
            Self::Commands => commands::render(&ctx, &CommandQuery::default()),
            Self::Support => support::render(&ctx, Accordion::closed(), &FaqQuery::default()),
            Self::NotFound => not_found::render(&ctx),
        }
    }
}

/// Request-scoped inputs shared by every page.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    /// Path the page was requested at, without query.
    pub path: String,
    pub navbar: NavbarState,
    /// Selection parameters of the current view, kept when the mobile menu
    /// is toggled.
    pub params: Vec<(&'static str, String)>,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a SiteConfig, path: impl Into<String>) -> Self {
        Self {
            config,
            path: path.into(),
            navbar: NavbarState::default(),
            params: Vec::new(),
        }
    }

    pub fn with_navbar(mut self, navbar: NavbarState) -> Self {
        self.navbar = navbar;
        self
    }

    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((key, value));
        }
        self
    }

    /// Link to the current view with the mobile menu toggled.
    pub fn menu_toggle_href(&self) -> String {
        let mut params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        if !self.navbar.toggled().is_mobile_open() {
            return query_href(&self.path, &params);
        }
        params.push(("menu", "open"));
        query_href(&self.path, &params)
    }
}

/// Build `path?k=v&...`, dropping empty values and encoding the rest.
pub fn query_href(path: &str, params: &[(&str, &str)]) -> String {
    let params: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    if params.is_empty() {
        return path.to_string();
    }
    match serde_urlencoded::to_string(&params) {
        Ok(query) => format!("{}?{}", path, query),
        Err(e) => {
            tracing::warn!("Failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}
