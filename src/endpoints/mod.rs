//! Per-resource wrappers. Each builds an endpoint path and query string, then
//! decodes the response through `CongressClient`.

pub mod amendment;
pub mod bill;
pub mod member;

pub use amendment::{AmendmentEndpoint, AmendmentType};
pub use bill::{BillEndpoint, BillType};
pub use member::MemberEndpoint;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::pagination::{Limit, Query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    UpdateDateAsc,
    UpdateDateDesc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateDateAsc => "updateDate+asc",
            Self::UpdateDateDesc => "updateDate+desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and filter options shared by the list operations.
///
/// Not every endpoint honours every filter: `sort` applies to bill listings
/// only and `current_member` to member listings only. Unset `limit` falls back
/// to the endpoint's default (20 for top-level listings, all records for the
/// sub-resources of a single bill, amendment or member).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub offset: Option<u32>,
    pub limit: Option<Limit>,
    pub from_datetime: Option<DateTime<Utc>>,
    pub to_datetime: Option<DateTime<Utc>>,
    pub sort: Option<SortOrder>,
    pub current_member: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn all(self) -> Self {
        self.limit(Limit::All)
    }

    #[must_use]
    pub fn from_datetime(mut self, from: DateTime<Utc>) -> Self {
        self.from_datetime = Some(from);
        self
    }

    #[must_use]
    pub fn to_datetime(mut self, to: DateTime<Utc>) -> Self {
        self.to_datetime = Some(to);
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub const fn current_member(mut self, current: bool) -> Self {
        self.current_member = Some(current);
        self
    }

    pub(crate) fn limit_or(&self, default: Limit) -> Limit {
        self.limit.unwrap_or(default)
    }

    pub(crate) fn paging_query(&self) -> Query {
        let mut query = Query::new();
        query.set("offset", self.offset.unwrap_or(0));
        query
    }

    pub(crate) fn window_query(&self) -> Query {
        let mut query = self.paging_query();
        query
            .set_datetime("fromDateTime", self.from_datetime)
            .set_datetime("toDateTime", self.to_datetime);
        query
    }
}

/// Sorted, comma-separated list of accepted spellings for error messages.
pub(crate) fn valid_list(values: &[&str]) -> String {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.join(", ")
}
