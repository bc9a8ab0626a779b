//! DTOs exchanged by the JSON API endpoints.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::account::Account;
use crate::domain::listing::ListResource;
use crate::pagination::PaginationMeta;

/// Query string accepted by every list endpoint. Values stay raw strings so
/// that blank parameters can fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    /// Only honoured by resources that filter on date.
    pub date: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of a list response, serialized as
/// `{"<collection>": [...], "pagination": {...}}`.
#[derive(Debug, PartialEq)]
pub struct ListEnvelope<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Serialize for ListEnvelope<T>
where
    T: ListResource + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(T::COLLECTION, &self.items)?;
        map.serialize_entry("pagination", &self.pagination)?;
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Issued token together with the account it identifies.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Account,
}

/// Query string of `GET /api/reports/summary`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
