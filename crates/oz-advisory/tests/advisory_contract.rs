//! The advisory boundary never surfaces a failure.

use oz_advisory::{
    AdvisoryError, AdvisoryReport, AdvisoryRequest, AdvisoryResult, AdvisoryService,
    RuleBasedAdvisor, advise_or_fallback,
};
use oz_core::{SystemParams, WaterQualityParams};
use std::cell::Cell;

/// Fails the first `failures` calls, then delegates to the rule-based advisor.
struct Flaky {
    failures: Cell<u32>,
    inner: RuleBasedAdvisor,
}

impl AdvisoryService for Flaky {
    fn name(&self) -> &str {
        "flaky"
    }

    fn advise(&self, request: &AdvisoryRequest) -> AdvisoryResult<AdvisoryReport> {
        let left = self.failures.get();
        if left > 0 {
            self.failures.set(left - 1);
            return Err(AdvisoryError::Service {
                status: 429,
                message: "rate limited".into(),
            });
        }
        self.inner.advise(request)
    }
}

fn reference_request() -> AdvisoryRequest {
    let system = SystemParams::default();
    let water = WaterQualityParams::default();
    AdvisoryRequest::new(system, water, oz_sim::simulate(&system, &water, None))
}

#[test]
fn failure_then_recovery() {
    let service = Flaky {
        failures: Cell::new(1),
        inner: RuleBasedAdvisor::default(),
    };
    let request = reference_request();

    let first = advise_or_fallback(&service, &request);
    assert!(first.is_fallback());
    assert_eq!(first.recommendations.len(), 2);
    assert_eq!(first.warnings.len(), 1);

    let second = advise_or_fallback(&service, &request);
    assert!(!second.is_fallback());
    assert!(second.summary.contains("CT"));
}

#[test]
fn fallback_round_trips_through_json() {
    let json = serde_json::to_string(&AdvisoryReport::fallback()).unwrap();
    let parsed = oz_advisory::parse_report(&json).unwrap();
    assert!(parsed.is_fallback());
}

#[test]
fn rule_based_advice_is_deterministic() {
    let request = reference_request();
    let advisor = RuleBasedAdvisor::default();
    assert_eq!(
        advisor.advise(&request).unwrap(),
        advisor.advise(&request).unwrap()
    );
}
