pub mod client;
pub mod types;

pub use client::SearchResolver;
pub use types::{links_from_response, OrganicResult, SearchApiResponse};
