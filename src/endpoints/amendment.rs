use std::fmt;
use std::str::FromStr;

use tracing::{instrument, warn};

use super::{valid_list, ListOptions};
use crate::config::{DEFAULT_LIST_LIMIT, MIN_TEXT_CONGRESS};
use crate::core::{CongressClient, Transport};
use crate::error::{Result, ValidationError};
use crate::models::{
    ActionsResponse, AmendmentResponse, AmendmentsResponse, CosponsorsResponse,
    TextVersionsResponse,
};
use crate::pagination::{Limit, Query};

const BASE_PATH: &str = "amendment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmendmentType {
    /// House amendment
    Hamdt,
    /// Senate amendment
    Samdt,
    /// Senate unprinted amendment
    Suamdt,
}

impl AmendmentType {
    pub const ALL: [Self; 3] = [Self::Hamdt, Self::Samdt, Self::Suamdt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hamdt => "hamdt",
            Self::Samdt => "samdt",
            Self::Suamdt => "suamdt",
        }
    }
}

impl FromStr for AmendmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| ValidationError::AmendmentType {
                given: s.to_string(),
                valid: valid_list(&Self::ALL.map(Self::as_str)),
            })
    }
}

impl fmt::Display for AmendmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amendment operations, reached through `CongressClient::amendments`.
pub struct AmendmentEndpoint<'a, T: Transport> {
    client: &'a CongressClient<T>,
}

impl<'a, T: Transport> AmendmentEndpoint<'a, T> {
    pub(crate) fn new(client: &'a CongressClient<T>) -> Self {
        Self { client }
    }

    /// Amendments sorted by date of latest action.
    #[instrument(target = "congress_api::amendment", skip(self, options))]
    pub async fn list_all(&self, options: &ListOptions) -> Result<AmendmentsResponse> {
        self.client
            .get_typed(BASE_PATH, options.window_query(), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::amendment", skip(self, options))]
    pub async fn list_by_congress(&self, congress: Option<u32>, options: &ListOptions) -> Result<AmendmentsResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let path = format!("{BASE_PATH}/{congress}");
        self.client
            .get_typed(&path, options.window_query(), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::amendment", skip(self, options))]
    pub async fn list_by_type(
        &self,
        amendment_type: AmendmentType,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<AmendmentsResponse> {
        let congress = self.client.config().resolve_congress(congress)?;
        let path = format!("{BASE_PATH}/{congress}/{amendment_type}");
        self.client
            .get_typed(&path, options.window_query(), Some(Self::listing_limit(options)))
            .await
    }

    #[instrument(target = "congress_api::amendment", skip(self))]
    pub async fn get_amendment(
        &self,
        amendment_type: AmendmentType,
        number: u32,
        congress: Option<u32>,
    ) -> Result<AmendmentResponse> {
        let path = self.amendment_path(amendment_type, number, congress)?;
        self.client.get_typed(&path, Query::new(), None).await
    }

    pub async fn get_actions(
        &self,
        amendment_type: AmendmentType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<ActionsResponse> {
        let path = format!("{}/actions", self.amendment_path(amendment_type, number, congress)?);
        self.sub_resource(&path, options).await
    }

    pub async fn get_cosponsors(
        &self,
        amendment_type: AmendmentType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<CosponsorsResponse> {
        let path = format!("{}/cosponsors", self.amendment_path(amendment_type, number, congress)?);
        self.sub_resource(&path, options).await
    }

    /// Amendments proposed to this amendment.
    pub async fn get_amendments(
        &self,
        amendment_type: AmendmentType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<AmendmentsResponse> {
        let path = format!("{}/amendments", self.amendment_path(amendment_type, number, congress)?);
        self.sub_resource(&path, options).await
    }

    /// Text versions, published from the 117th Congress onwards. Earlier
    /// congresses fail without a request.
    pub async fn get_text(
        &self,
        amendment_type: AmendmentType,
        number: u32,
        congress: Option<u32>,
        options: &ListOptions,
    ) -> Result<TextVersionsResponse> {
        let resolved = self.client.config().resolve_congress(congress)?;
        if resolved < MIN_TEXT_CONGRESS {
            warn!(congress = resolved, "Amendment text requested before it was published");
            return Err(ValidationError::TextUnsupportedCongress {
                given: resolved,
                min: MIN_TEXT_CONGRESS,
            }
            .into());
        }
        let path = format!("{}/text", self.amendment_path(amendment_type, number, Some(resolved))?);
        self.sub_resource(&path, options).await
    }

    fn listing_limit(options: &ListOptions) -> Limit {
        options.limit_or(Limit::Count(DEFAULT_LIST_LIMIT))
    }

    fn amendment_path(&self, amendment_type: AmendmentType, number: u32, congress: Option<u32>) -> Result<String> {
        if number == 0 {
            return Err(ValidationError::AmendmentNumber(number).into());
        }
        let congress = self.client.config().resolve_congress(congress)?;
        Ok(format!("{BASE_PATH}/{congress}/{amendment_type}/{number}"))
    }

    async fn sub_resource<R>(&self, path: &str, options: &ListOptions) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        self.client
            .get_typed(path, options.paging_query(), Some(options.limit_or(Limit::All)))
            .await
    }
}
