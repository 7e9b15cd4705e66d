use std::fmt;
use std::str::FromStr;

use tracing::instrument;

use super::{valid_list, ListOptions};
use crate::config::DEFAULT_LIST_LIMIT;
use crate::core::{CongressClient, Transport};
use crate::error::{Result, ValidationError};
use crate::models::{
    ActionsResponse, AmendmentsResponse, BillResponse, BillsResponse, CommitteesResponse,
    CosponsorsResponse, RelatedBillsResponse, SubjectsResponse, SummariesResponse,
    TextVersionsResponse, TitlesResponse,
};
use crate::pagination::{Limit, Query};

const BASE_PATH: &str = "bill";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillType {
    /// House bill
    Hr,
    /// Senate bill
    S,
    Hjres,
    Sjres,
    Hconres,
    Sconres,
    /// House simple resolution
    Hres,
    /// Senate simple resolution
    Sres,
}

impl BillType {
    pub const ALL: [Self; 8] = [
        Self::Hr,
        Self::S,
        Self::Hjres,
        Self::Sjres,
        Self::Hconres,
        Self::Sconres,
        Self::Hres,
        Self::Sres,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::S => "s",
            Self::Hjres => "hjres",
            Self::Sjres => "sjres",
            Self::Hconres => "hconres",
            Self::Sconres => "sconres",
            Self::Hres => "hres",
            Self::Sres => "sres",
        }
    }
}

impl FromStr for BillType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| ValidationError::BillType {
                given: s.to_string(),
                valid: valid_list(&Self::ALL.map(Self::as_str)),
            })
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bill operations, reached through `CongressClient::bills`.
///
/// `congress` arguments fall back to the configured default congress.
pub struct BillEndpoint<'a, T: Transport> {
    client: &'a CongressClient<T>,
}

impl<'a, T: Transport> BillEndpoint<'a, T> {
    pub(crate) fn new(client: &'a CongressClient<T>) -> Self {
        Self { client }
    }

    /// Bills sorted by date of latest action.
    #[instrument(target = "congress_api::bill", skip(self, options))]
    pub async fn list_all(&self, options: &ListOptions) -> Result<BillsResponse> {
        self.client
            .get_typed(BASE_PATH, Self::listing_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::bill", skip(self, options))]
    pub async fn list_by_congress(&self, congress: Option<u32>, options: &ListOptions) -> Result<BillsResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let path = format!("{BASE_PATH}/{congress}");
        self.client
            .get_typed(&path, Self::listing_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::bill", skip(self, options))]
    pub async fn list_by_type(
        &self,
        bill_type: BillType,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<BillsResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let path = format!("{BASE_PATH}/{congress}/{bill_type}");
        self.client
            .get_typed(&path, Self::listing_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::bill", skip(self))]
    pub async fn get_bill(&self, bill_type: BillType, number: u32, congress: Option<u32>) -> Result<BillResponse> {
        let path = self.bill_path(bill_type, number, congress)?;
        self.client.get_typed(&path, Query::new(), None).await
    }

    pub async fn get_actions(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<ActionsResponse> {
        self.sub_resource(bill_type, number, congress, "actions", options.paging_query(), options)
            .await
    }

    pub async fn get_amendments(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<AmendmentsResponse> {
        self.sub_resource(bill_type, number, congress, "amendments", options.paging_query(), options)
            .await
    }

    pub async fn get_committees(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<CommitteesResponse> {
        self.sub_resource(bill_type, number, congress, "committees", options.paging_query(), options)
            .await
    }

    pub async fn get_cosponsors(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<CosponsorsResponse> {
        self.sub_resource(bill_type, number, congress, "cosponsors", options.paging_query(), options)
            .await
    }

    pub async fn get_related_bills(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<RelatedBillsResponse> {
        self.sub_resource(bill_type, number, congress, "relatedbills", options.paging_query(), options)
            .await
    }

    /// Legislative subjects and policy area. Honours the update-date window.
    pub async fn get_subjects(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<SubjectsResponse> {
        self.sub_resource(bill_type, number, congress, "subjects", options.window_query(), options)
            .await
    }

    pub async fn get_summaries(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<SummariesResponse> {
        self.sub_resource(bill_type, number, congress, "summaries", options.paging_query(), options)
            .await
    }

    pub async fn get_text(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<TextVersionsResponse> {
        self.sub_resource(bill_type, number, congress, "text", options.paging_query(), options)
            .await
    }

    /// Titles of the bill. Honours the update-date window.
    pub async fn get_titles(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<TitlesResponse> {
        self.sub_resource(bill_type, number, congress, "titles", options.window_query(), options)
            .await
    }

    fn listing_query(options: &ListOptions) -> Query {
        let mut query = options.window_query();
        query.set_opt("sort", options.sort);
        query
    }

    fn listing_limit(options: &ListOptions) -> Limit {
        options.limit_or(Limit::Count(DEFAULT_LIST_LIMIT))
    }

    fn bill_path(&self, bill_type: BillType, number: u32, congress: Option<u32>) -> Result<String> {
        if number == 0 {
            return Err(ValidationError::BillNumber(number).into());
        }
        let congress = self.client.config().resolve_congress(congress)?;
        Ok(format!("{BASE_PATH}/{congress}/{bill_type}/{number}"))
    }

    async fn sub_resource<R>(
        &self,
        bill_type: BillType,
        number: u32,
        congress: Option<u32>,
        resource: &str,
        query: Query,
        options: &ListOptions,
    ) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let path = format!("{}/{resource}", self.bill_path(bill_type, number, congress)?);
        self.client
            .get_typed(&path, query, Some(options.limit_or(Limit::All)))
            .await
    }
}
