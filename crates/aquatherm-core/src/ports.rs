//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

use async_trait::async_trait;

use crate::error::ErrorInfo;
use crate::map::MapView;
use crate::models::AnalysisResult;
use crate::request::AnalysisRequest;

/// Port for the remote environmental-analysis service
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Run one analysis.
    ///
    /// Implementations make at most one outbound call and never retry.
    /// Every failure is returned as a typed [`ErrorInfo`].
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ErrorInfo>;
}

/// Port for the map capability
pub trait MapSurface {
    /// Re-center and redraw markers
    fn show(&mut self, view: &MapView);
}
