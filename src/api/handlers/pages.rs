use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use maud::Markup;
use serde::Deserialize;

use super::{CommandsParams, FaqParams};
use crate::api::extract::LenientQuery;
use crate::api::SharedConfig;
use crate::content;
use crate::models::{CategoryFilter, DocTab};
use crate::pages::{self, PageContext};
use crate::state::{Accordion, NavbarState};

fn navbar_from(menu: Option<&str>) -> NavbarState {
    NavbarState::new(menu == Some("open"))
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub menu: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DocumentationParams {
    pub tab: Option<String>,
    pub menu: Option<String>,
}

pub async fn home(
    State(config): State<SharedConfig>,
    LenientQuery(params): LenientQuery<HomeParams>,
) -> Markup {
    let ctx = PageContext::new(&config, "/").with_navbar(navbar_from(params.menu.as_deref()));
    pages::render_home(&ctx)
}

pub async fn documentation(
    State(config): State<SharedConfig>,
    LenientQuery(params): LenientQuery<DocumentationParams>,
) -> Markup {
    let tab = match params.tab.as_deref() {
        None | Some("") => DocTab::default(),
        Some(raw) => DocTab::from_param(raw).unwrap_or_else(|| {
            tracing::debug!("Unknown documentation tab {:?}", raw);
            DocTab::default()
        }),
    };
    let tab_param = if tab == DocTab::default() { "" } else { tab.slug() };

    let ctx = PageContext::new(&config, "/documentation")
        .with_navbar(navbar_from(params.menu.as_deref()))
        .with_param("tab", tab_param);
    pages::render_documentation(&ctx, tab)
}

pub async fn commands(
    State(config): State<SharedConfig>,
    LenientQuery(params): LenientQuery<CommandsParams>,
) -> Markup {
    let query = params.to_query();
    let category = if query.category == CategoryFilter::All {
        ""
    } else {
        query.category.as_str()
    };

    let ctx = PageContext::new(&config, "/commands")
        .with_navbar(navbar_from(params.menu.as_deref()))
        .with_param("q", query.search.clone())
        .with_param("category", category);
    pages::render_commands(&ctx, &query)
}

pub async fn support(
    State(config): State<SharedConfig>,
    LenientQuery(params): LenientQuery<FaqParams>,
) -> Markup {
    let accordion = Accordion::from_param(params.faq.as_deref(), content::faqs().len());
    let query = params.to_query();
    let open = accordion
        .open_panel()
        .map(|p| p.to_string())
        .unwrap_or_default();

    let ctx = PageContext::new(&config, "/support")
        .with_navbar(navbar_from(params.menu.as_deref()))
        .with_param("q", query.search.clone())
        .with_param("faq", open);
    pages::render_support(&ctx, accordion, &query)
}

pub async fn not_found(State(config): State<SharedConfig>, uri: Uri) -> impl IntoResponse {
    tracing::debug!("No page for {}", uri.path());
    let ctx = PageContext::new(&config, uri.path());
    (StatusCode::NOT_FOUND, pages::render_not_found(&ctx))
}
