pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::{MockHandle, MockResponse, MockTransport};
