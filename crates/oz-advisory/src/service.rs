//! Advisory service seam.

use crate::error::AdvisoryResult;
use crate::report::AdvisoryReport;
use crate::request::AdvisoryRequest;
use tracing::warn;

/// A source of advisory text for one run.
///
/// Implementations may be slow and may fail; callers go through
/// `advise_or_fallback` so a failure never reaches the rest of the system.
pub trait AdvisoryService {
    fn name(&self) -> &str;

    fn advise(&self, request: &AdvisoryRequest) -> AdvisoryResult<AdvisoryReport>;
}

/// Ask `service`, substituting `AdvisoryReport::fallback()` on any error.
pub fn advise_or_fallback(service: &dyn AdvisoryService, request: &AdvisoryRequest) -> AdvisoryReport {
    match service.advise(request) {
        Ok(report) => report,
        Err(err) => {
            warn!(service = service.name(), error = %err, "advisory unavailable, using fallback");
            AdvisoryReport::fallback()
        }
    }
}
