pub mod pages;

use axum::{response::IntoResponse, Json};
use serde::Deserialize;

use super::extract::LenientQuery;
use crate::content;
use crate::models::*;
use crate::state::{filter_commands, filter_faqs, CommandQuery, FaqQuery};

// ============================================================
// Query parameters
// ============================================================

#[derive(Debug, Default, Deserialize)]
pub struct CommandsParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub menu: Option<String>,
}

impl CommandsParams {
    /// Unknown categories fall back to showing every category.
    pub fn to_query(&self) -> CommandQuery {
        let category = match self.category.as_deref() {
            None | Some("") => CategoryFilter::All,
            Some(raw) => CategoryFilter::from_str(raw).unwrap_or_else(|| {
                tracing::debug!("Unknown command category {:?}, showing all", raw);
                CategoryFilter::All
            }),
        };
        CommandQuery::new(self.q.clone().unwrap_or_default(), category)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FaqParams {
    pub q: Option<String>,
    pub faq: Option<String>,
    pub menu: Option<String>,
}

impl FaqParams {
    pub fn to_query(&self) -> FaqQuery {
        FaqQuery::new(self.q.clone().unwrap_or_default())
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Catalogs
// ============================================================

pub async fn list_commands(
    LenientQuery(params): LenientQuery<CommandsParams>,
) -> Json<Vec<CommandDescriptor>> {
    let query = params.to_query();
    let all = content::commands();
    let matches = filter_commands(&all, &query).into_iter().cloned().collect();
    Json(matches)
}

pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<_> = CategoryFilter::choices()
        .iter()
        .map(|choice| {
            serde_json::json!({
                "id": choice.as_str(),
                "label": choice.label(),
                "icon": choice.icon(),
            })
        })
        .collect();
    Json(categories)
}

pub async fn list_faqs(LenientQuery(params): LenientQuery<FaqParams>) -> Json<Vec<FaqEntry>> {
    let all = content::faqs();
    let matches = filter_faqs(&all, &params.to_query())
        .into_iter()
        .map(|(_, entry)| *entry)
        .collect();
    Json(matches)
}

pub async fn list_troubleshooting() -> Json<Vec<TroubleshootingEntry>> {
    Json(content::troubleshooting())
}

pub async fn list_features() -> Json<Vec<Feature>> {
    Json(content::features())
}
