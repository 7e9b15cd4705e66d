//! Typed records decoded from API responses.
//!
//! Every field the service might omit is optional and unknown fields are
//! ignored, so records survive additions on the server side.

pub mod amendment;
pub mod bill;
pub mod member;

pub use amendment::*;
pub use bill::*;
pub use member::*;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Echo of the request parameters the server saw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// A `{count, url}` pointer to a sub-resource listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAction {
    #[serde(default)]
    pub action_date: Option<String>,
    #[serde(default)]
    pub action_time: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyArea {
    #[serde(default)]
    pub name: Option<String>,
}

/// Sponsor or cosponsor of a bill or amendment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(default)]
    pub bioguide_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub district: Option<String>,
    #[serde(default)]
    pub is_by_request: Option<String>,
    #[serde(default)]
    pub is_original_cosponsor: Option<bool>,
    #[serde(default)]
    pub sponsorship_date: Option<String>,
    #[serde(default)]
    pub sponsorship_withdrawn_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSystem {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub system_code: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedVote {
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub roll_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub session_number: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// An action taken on a bill or amendment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(default)]
    pub action_code: Option<String>,
    #[serde(default)]
    pub action_date: Option<String>,
    #[serde(default)]
    pub action_time: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub action_type: Option<String>,
    #[serde(default)]
    pub source_system: Option<SourceSystem>,
    #[serde(default)]
    pub committees: Vec<CommitteeRef>,
    #[serde(default)]
    pub recorded_votes: Vec<RecordedVote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    #[serde(default, rename = "type")]
    pub format_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A published text version of a bill or amendment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextVersion {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub version_type: Option<String>,
    #[serde(default)]
    pub formats: Vec<TextFormat>,
}

/// Declares a list envelope: one data field plus the shared paging metadata.
macro_rules! list_response {
    ($(#[$meta:meta])* $name:ident, $field:ident, $rename:literal, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(default, rename = $rename)]
            pub $field: Vec<$item>,
            #[serde(default)]
            pub pagination: Option<$crate::models::Pagination>,
            #[serde(default)]
            pub request: Option<$crate::models::RequestInfo>,
        }
    };
}
pub(crate) use list_response;

list_response!(
    /// Actions on a bill or amendment.
    ActionsResponse, actions, "actions", Action
);
list_response!(
    /// Cosponsors of a bill or amendment.
    CosponsorsResponse, cosponsors, "cosponsors", Sponsor
);
list_response!(
    /// Text versions of a bill or amendment.
    TextVersionsResponse, text_versions, "textVersions", TextVersion
);

/// Accepts `"3076"` or `3076` and yields the string form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
