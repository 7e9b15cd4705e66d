use serde::{Deserialize, Serialize};

use super::{
    list_response, opt_string_or_number, string_or_number, LatestAction, PolicyArea, RequestInfo,
    ResourceRef, Sponsor,
};

/// Entry in a bill listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub origin_chamber: Option<String>,
    #[serde(default)]
    pub origin_chamber_code: Option<String>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub update_date_including_text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Law {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub law_type: Option<String>,
}

/// Full bill record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default, rename = "type")]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub introduced_date: Option<String>,
    #[serde(default)]
    pub origin_chamber: Option<String>,
    #[serde(default)]
    pub origin_chamber_code: Option<String>,
    #[serde(default)]
    pub policy_area: Option<PolicyArea>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub laws: Vec<Law>,
    #[serde(default)]
    pub constitutional_authority_statement_text: Option<String>,
    #[serde(default)]
    pub actions: Option<ResourceRef>,
    #[serde(default)]
    pub amendments: Option<ResourceRef>,
    #[serde(default)]
    pub committees: Option<ResourceRef>,
    #[serde(default)]
    pub cosponsors: Option<ResourceRef>,
    #[serde(default)]
    pub related_bills: Option<ResourceRef>,
    #[serde(default)]
    pub subjects: Option<ResourceRef>,
    #[serde(default)]
    pub summaries: Option<ResourceRef>,
    #[serde(default)]
    pub text_versions: Option<ResourceRef>,
    #[serde(default)]
    pub titles: Option<ResourceRef>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub update_date_including_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillResponse {
    pub bill: Bill,
    #[serde(default)]
    pub request: Option<RequestInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeActivity {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Committee a bill was referred to, with what it did there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub system_code: Option<String>,
    #[serde(default, rename = "type")]
    pub committee_type: Option<String>,
    #[serde(default)]
    pub activities: Vec<CommitteeActivity>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDetail {
    #[serde(default)]
    pub identified_by: Option<String>,
    #[serde(default, rename = "type")]
    pub relationship_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBill {
    #[serde(default)]
    pub congress: Option<u32>,
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default, rename = "type")]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub latest_action: Option<LatestAction>,
    #[serde(default)]
    pub relationship_details: Vec<RelationshipDetail>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislativeSubject {
    pub name: String,
    #[serde(default)]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subjects {
    #[serde(default)]
    pub legislative_subjects: Vec<LegislativeSubject>,
    #[serde(default)]
    pub policy_area: Option<PolicyArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectsResponse {
    #[serde(default)]
    pub subjects: Subjects,
    #[serde(default)]
    pub pagination: Option<super::Pagination>,
    #[serde(default)]
    pub request: Option<RequestInfo>,
}

/// CRS summary of a bill at one stage of its progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub action_date: Option<String>,
    #[serde(default)]
    pub action_desc: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub version_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub title: String,
    #[serde(default)]
    pub title_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub title_type_code: Option<String>,
    #[serde(default)]
    pub chamber_code: Option<String>,
    #[serde(default)]
    pub chamber_name: Option<String>,
    #[serde(default)]
    pub bill_text_version_code: Option<String>,
    #[serde(default)]
    pub bill_text_version_name: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

list_response!(BillsResponse, bills, "bills", BillSummary);
list_response!(CommitteesResponse, committees, "committees", Committee);
list_response!(RelatedBillsResponse, related_bills, "relatedBills", RelatedBill);
list_response!(SummariesResponse, summaries, "summaries", Summary);
list_response!(TitlesResponse, titles, "titles", Title);
