use super::error::ApiError;
use crate::core::service::LoyverseService;
use crate::utils::error::ProxyError;

/// Shared by every handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: LoyverseService,
    pub propagate_upstream_status: bool,
}

impl AppState {
    pub fn new(service: LoyverseService, propagate_upstream_status: bool) -> Self {
        Self {
            service,
            propagate_upstream_status,
        }
    }

    pub(crate) fn error(&self, summary: &str, err: ProxyError) -> ApiError {
        ApiError::from_proxy(summary, err, self.propagate_upstream_status)
    }
}
