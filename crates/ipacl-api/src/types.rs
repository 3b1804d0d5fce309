// Wire types for the IP access list endpoints.
//
// Field names are the service's JSON names and must not change. The same
// shapes are used by the account and workspace scopes.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

// ── Identifiers ─────────────────────────────────────────────────────

/// Opaque identifier assigned by the service on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── List type ───────────────────────────────────────────────────────

/// Whether the listed ranges are allowed or blocked.
///
/// Parsing is case-sensitive: only `ALLOW` and `BLOCK` are accepted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ListType {
    Allow,
    Block,
}

// ── Requests ────────────────────────────────────────────────────────

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(value: &bool) -> bool {
    *value
}

fn default_true() -> bool {
    true
}

/// Body of a create call.
///
/// `enabled` is omitted from the body when it holds the default `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIpAccessList {
    pub label: String,
    pub list_type: ListType,
    pub ip_addresses: Vec<String>,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub enabled: bool,
}

/// Body of an update call. The identifier travels in the URL path.
///
/// PATCH only touches the fields present, so `enabled` is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateIpAccessList {
    #[serde(skip)]
    pub ip_access_list_id: ListId,
    pub label: String,
    pub list_type: ListType,
    pub ip_addresses: Vec<String>,
    pub enabled: bool,
}

// ── Responses ───────────────────────────────────────────────────────

/// Full remote representation of an access list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAccessListInfo {
    pub list_id: ListId,
    pub label: String,
    pub list_type: ListType,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
}

/// `{"ip_access_list": {...}}` envelope returned by get.
#[derive(Debug, Clone, Deserialize)]
pub struct IpAccessListResponse {
    pub ip_access_list: IpAccessListInfo,
}

/// Only the identifier is needed from a create response.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIpAccessList {
    pub list_id: ListId,
}

/// `{"ip_access_list": {...}}` envelope returned by create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIpAccessListResponse {
    pub ip_access_list: CreatedIpAccessList,
}
