use serde::{Deserialize, Serialize};

use super::{list_response, opt_string_or_number, LatestAction, PolicyArea, RequestInfo, ResourceRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depiction {
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One term of service in a chamber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default)]
    pub start_year: Option<u32>,
    #[serde(default)]
    pub end_year: Option<u32>,
    #[serde(default)]
    pub member_type: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub district: Option<u32>,
}

/// Listings wrap terms as `{"item": [...]}`; member detail uses a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Terms {
    List(Vec<Term>),
    Wrapped { item: Vec<Term> },
}

impl Default for Terms {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Terms {
    pub fn items(&self) -> &[Term] {
        match self {
            Self::List(items) | Self::Wrapped { item: items } => items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub bioguide_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub party_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<u32>,
    #[serde(default)]
    pub depiction: Option<Depiction>,
    #[serde(default)]
    pub terms: Terms,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyHistory {
    #[serde(default)]
    pub party_abbreviation: Option<String>,
    #[serde(default)]
    pub party_name: Option<String>,
    #[serde(default)]
    pub start_year: Option<u32>,
    #[serde(default)]
    pub end_year: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInformation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub office_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub bioguide_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub direct_order_name: Option<String>,
    #[serde(default)]
    pub inverted_order_name: Option<String>,
    #[serde(default)]
    pub honorific_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub current_member: Option<bool>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<u32>,
    #[serde(default)]
    pub party_history: Vec<PartyHistory>,
    #[serde(default)]
    pub terms: Terms,
    #[serde(default)]
    pub depiction: Option<Depiction>,
    #[serde(default)]
    pub address_information: Option<AddressInformation>,
    #[serde(default)]
    pub official_website_url: Option<String>,
    #[serde(default)]
    pub sponsored_legislation: Option<ResourceRef>,
    #[serde(default)]
    pub cosponsored_legislation: Option<ResourceRef>,
    #[serde(default)]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub member: Member,
    #[serde(default)]
    pub request: Option<RequestInfo>,
}

/// A bill or amendment a member sponsored or cosponsored.
///
/// Amendments carry `amendment_number` instead of `number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredItem {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub amendment_number: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub introduced_date: Option<String>,
    #[serde(default)]
    pub policy_area: Option<PolicyArea>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub url: Option<String>,
}

list_response!(MembersResponse, members, "members", MemberSummary);
list_response!(
    SponsoredLegislationResponse,
    sponsored_legislation,
    "sponsoredLegislation",
    SponsoredItem
);
list_response!(
    CosponsoredLegislationResponse,
    cosponsored_legislation,
    "cosponsoredLegislation",
    SponsoredItem
);
