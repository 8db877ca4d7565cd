//! Pagination extractor
//!
//! Extracts page/count offset pagination from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use reviews_core::traits::ReviewQuery;
use serde::{Deserialize, Deserializer};

use crate::response::ApiError;

/// Default page size
const DEFAULT_COUNT: i64 = 5;
/// First page
const FIRST_PAGE: i64 = 1;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Reviews per page
    #[serde(default, deserialize_with = "blank_as_none")]
    pub count: Option<i64>,
    /// 1-based page number
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
}

/// `?count=` reads the same as an absent parameter.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Pagination parameters with defaults applied.
///
/// Values are passed to the query as given; the database rejects a
/// negative limit or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPage {
    pub page: i64,
    pub count: i64,
}

impl Default for ReviewPage {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            count: DEFAULT_COUNT,
        }
    }
}

impl ReviewPage {
    /// Offset/limit window for the repository
    pub fn query(&self) -> ReviewQuery {
        ReviewQuery::page(self.page, self.count)
    }
}

impl From<PageParams> for ReviewPage {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(FIRST_PAGE),
            count: params.count.unwrap_or(DEFAULT_COUNT),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ReviewPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ReviewPage::from(params))
    }
}
