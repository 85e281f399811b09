//! Query extraction that never rejects a request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;

/// Like [`axum::extract::Query`], except a repeated key keeps its first
/// value and a query that still fails to parse yields `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse_query(parts.uri.query().unwrap_or_default())))
    }
}

/// Decode `raw` into `T`, first value wins for each key.
pub fn parse_query<T>(raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(raw) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!("Ignoring undecodable query {:?}: {}", raw, e);
            return T::default();
        }
    };

    let mut first: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if first.iter().any(|(seen, _)| *seen == key) {
            tracing::debug!("Ignoring repeated query key {:?}", key);
            continue;
        }
        first.push((key, value));
    }

    serde_urlencoded::to_string(&first)
        .map_err(|e| e.to_string())
        .and_then(|query| serde_urlencoded::from_str(&query).map_err(|e| e.to_string()))
        .unwrap_or_else(|e| {
            tracing::debug!("Ignoring malformed query {:?}: {}", raw, e);
            T::default()
        })
}
