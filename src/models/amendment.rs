use serde::{Deserialize, Serialize};

use super::{list_response, opt_string_or_number, LatestAction, RequestInfo, ResourceRef, Sponsor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentSummary {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub amendment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The bill (or treaty) an amendment modifies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendedBill {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub origin_chamber: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amendment {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub amendment_type: Option<String>,
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub amended_bill: Option<AmendedBill>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub proposed_date: Option<String>,
    #[serde(default)]
    pub submitted_date: Option<String>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub actions: Option<ResourceRef>,
    #[serde(default)]
    pub cosponsors: Option<ResourceRef>,
    #[serde(default)]
    pub amendments_to_amendment: Option<ResourceRef>,
    #[serde(default)]
    pub text_versions: Option<ResourceRef>,
    #[serde(default)]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmendmentResponse {
    pub amendment: Amendment,
    #[serde(default)]
    pub request: Option<RequestInfo>,
}

list_response!(
    /// Amendment listings, including amendments to a bill or to another amendment.
    AmendmentsResponse, amendments, "amendments", AmendmentSummary
);
