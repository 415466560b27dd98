// self
use crate::obs::{FlowKind, FlowOutcome};

/// Name of the counter incremented for every flow attempt and result.
pub const FLOW_COUNTER: &str = "casdoor_bridge_flow_total";

/// Counts a flow outcome, labeled by flow, stage, and outcome, when `metrics` is enabled.
///
/// `stage` matches the `stage` field of the surrounding `casdoor_bridge.flow` span, so a
/// failing counter series can be joined with its log lines.
pub fn record_flow_outcome(kind: FlowKind, stage: &'static str, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		FLOW_COUNTER,
		"flow" => kind.as_str(),
		"stage" => stage,
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, stage, outcome);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_harmless() {
		for outcome in [FlowOutcome::Attempt, FlowOutcome::Success, FlowOutcome::Failure] {
			record_flow_outcome(FlowKind::Callback, "complete_callback", outcome);
		}

		assert_eq!(FLOW_COUNTER, "casdoor_bridge_flow_total");
	}
}
