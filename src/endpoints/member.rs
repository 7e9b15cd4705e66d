use tracing::instrument;

use super::ListOptions;
use crate::config::DEFAULT_LIST_LIMIT;
use crate::core::{CongressClient, Transport};
use crate::error::{Result, ValidationError};
use crate::models::{
    CosponsoredLegislationResponse, MemberResponse, MembersResponse, SponsoredLegislationResponse,
};
use crate::pagination::{Limit, Query};

const BASE_PATH: &str = "member";

/// Member operations, reached through `CongressClient::members`.
pub struct MemberEndpoint<'a, T: Transport> {
    client: &'a CongressClient<T>,
}

impl<'a, T: Transport> MemberEndpoint<'a, T> {
    pub(crate) fn new(client: &'a CongressClient<T>) -> Self {
        Self { client }
    }

    /// All members. Honours the update-date window and `current_member`.
    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_members(&self, options: &ListOptions) -> Result<MembersResponse> {
        let mut query = options.window_query();
        query.set_flag("currentMember", options.current_member);
        self.client.get_typed(BASE_PATH, query, Some(Self::listing_limit(options))).await
    }

    #[instrument(target = "congress_api::member", skip(self))]
    pub async fn get_member(&self, bioguide_id: &str) -> Result<MemberResponse> {
        let id = validate_bioguide(bioguide_id)?;
        self.client.get_typed(&format!("{BASE_PATH}/{id}"), Query::new(), None).await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_sponsored_legislation(
        &self,
        bioguide_id: &str,
        options: &ListOptions,
    ) -> Result<SponsoredLegislationResponse> {
        let id = validate_bioguide(bioguide_id)?;
        let path = format!("{BASE_PATH}/{id}/sponsored-legislation");
        self.client
            .get_typed(&path, options.paging_query(), Some(options.limit_or(Limit::All)))
            .await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_cosponsored_legislation(
        &self,
        bioguide_id: &str,
        options: &ListOptions,
    ) -> Result<CosponsoredLegislationResponse> {
        let id = validate_bioguide(bioguide_id)?;
        let path = format!("{BASE_PATH}/{id}/cosponsored-legislation");
        self.client
            .get_typed(&path, options.paging_query(), Some(options.limit_or(Limit::All)))
            .await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_by_congress(&self, congress: Option<u32>, options: &ListOptions) -> Result<MembersResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let path = format!("{BASE_PATH}/congress/{congress}");
        self.client
            .get_typed(&path, Self::filter_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_by_state(&self, state_code: &str, options: &ListOptions) -> Result<MembersResponse> {
        let state = normalize_state(state_code)?;
        let path = format!("{BASE_PATH}/{state}");
        self.client
            .get_typed(&path, Self::filter_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_by_state_district(
        &self,
        state_code: &str,
        district: u32,
        options: &ListOptions,
    ) -> Result<MembersResponse> {
        let state = normalize_state(state_code)?;
        let path = format!("{BASE_PATH}/{state}/{district}");
        self.client
            .get_typed(&path, Self::filter_query(options), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::member", skip(self, options))]
    pub async fn list_by_congress_state_district(
        &self,
        congress: Option<u32>,
        state_code: &str,
        district: u32,
        options: &ListOptions,
    ) -> Result<MembersResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let state = normalize_state(state_code)?;
        let path = format!("{BASE_PATH}/congress/{congress}/{state}/{district}");
        self.client
            .get_typed(&path, Self::filter_query(options), Some(Self::listing_limit(options)))
            .await
    }

    fn filter_query(options: &ListOptions) -> Query {
        let mut query = options.paging_query();
        query.set_flag("currentMember", options.current_member);
        query
    }

    fn listing_limit(options: &ListOptions) -> Limit {
        options.limit_or(Limit::Count(DEFAULT_LIST_LIMIT))
    }
}

/// Two ASCII letters, upper-cased (`ca` -> `CA`).
pub fn normalize_state(code: &str) -> Result<String, ValidationError> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(ValidationError::StateCode(code.to_string()))
    }
}

fn validate_bioguide(id: &str) -> Result<&str, ValidationError> {
    let trimmed = id.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(trimmed)
    } else {
        Err(ValidationError::BioguideId(id.to_string()))
    }
}
