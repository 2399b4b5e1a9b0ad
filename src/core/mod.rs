pub mod aggregate;
pub mod client;
pub mod service;
pub mod transform;

pub use crate::domain::model::{
    AggregateData, EndpointError, ModifierGroup, ModifierGroupsResponse, QueryParams,
    VariantSummary,
};
pub use crate::domain::ports::UpstreamApi;
pub use crate::utils::error::Result;
