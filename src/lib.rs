//! Async client for the Congress.gov v3 API.
//!
//! ```no_run
//! use congress_api::{BillType, CongressClient, ListOptions};
//!
//! # async fn run() -> congress_api::Result<()> {
//! let client = CongressClient::from_env()?;
//! let bill = client.bills().get_bill(BillType::Hr, 3076, Some(117)).await?;
//! let actions = client
//!     .bills()
//!     .get_actions(BillType::Hr, 3076, Some(117), &ListOptions::new())
//!     .await?;
//! println!("{:?}: {} actions", bill.bill.title, actions.actions.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;
pub mod transport;

// Convenient re-exports
pub use crate::config::{ApiConfig, KeyFromEnv, ResponseFormat};
pub use crate::core::{CongressClient, RawResponse, RequestSpec, Transport};
pub use endpoints::{AmendmentType, BillType, ListOptions, SortOrder};
pub use error::{CongressApiError, ConfigError, Result, ValidationError};
pub use pagination::{Limit, Query};
pub use transport::{HttpTransport, MockTransport};
