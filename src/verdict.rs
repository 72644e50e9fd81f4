/// Mapping a prediction outcome to what the popup shows

use crate::lookup::TransportError;
use crate::prediction::{PredictionDetails, PredictionResult};

/// Shown whenever the prediction API could not produce a usable answer
pub const UNREACHABLE_MESSAGE: &str =
    "Error: the prediction API is not responding. Check that the server (uvicorn api:app) is running.";

/// Publisher name the service reports when Crossref has no match
const UNKNOWN_PUBLISHER: &str = "Unknown";

/// Terminal state of one popup open
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Danger {
        risk_score: f64,
        publisher: String,
        red_flags: Vec<RedFlag>,
    },
    Reliable {
        risk_score: f64,
        citation_count: f64,
        red_flags: Vec<RedFlag>,
    },
    Error(String),
}

/// Suspicious signals in the journal metrics, shown as captions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedFlag {
    UnknownPublisher,
    NoCitationsDespiteWorks,
}

impl RedFlag {
    pub fn caption(&self) -> &'static str {
        match self {
            RedFlag::UnknownPublisher => "No official publisher found.",
            RedFlag::NoCitationsDespiteWorks => "Zero citations despite published works.",
        }
    }
}

/// Pick the display state for a lookup outcome
pub fn render(outcome: Result<PredictionResult, TransportError>) -> DisplayState {
    match outcome {
        Err(_) => DisplayState::Error(UNREACHABLE_MESSAGE.to_string()),
        Ok(result) if result.is_predatory => DisplayState::Danger {
            risk_score: result.risk_score,
            red_flags: red_flags(&result.details),
            publisher: result.details.publisher,
        },
        Ok(result) => DisplayState::Reliable {
            risk_score: result.risk_score,
            citation_count: result.details.oa_cited,
            red_flags: red_flags(&result.details),
        },
    }
}

pub fn red_flags(details: &PredictionDetails) -> Vec<RedFlag> {
    let mut flags = Vec::new();

    if details.publisher == UNKNOWN_PUBLISHER {
        flags.push(RedFlag::UnknownPublisher);
    }
    if details.oa_cited == 0.0 && details.oa_works.is_some_and(|works| works > 0.0) {
        flags.push(RedFlag::NoCitationsDespiteWorks);
    }

    flags
}

/// Risk score as shown to the user, e.g. "87%" or "12.5%"
pub fn format_risk(risk_score: f64) -> String {
    format!("{}%", risk_score)
}

impl DisplayState {
    /// Heading of the verdict card
    pub fn headline(&self) -> &'static str {
        match self {
            DisplayState::Danger { .. } => "⚠️ DANGER",
            DisplayState::Reliable { .. } => "✅ RELIABLE",
            DisplayState::Error(_) => "Error",
        }
    }

    pub fn risk_label(&self) -> Option<String> {
        match self {
            DisplayState::Danger { risk_score, .. } | DisplayState::Reliable { risk_score, .. } => {
                Some(format_risk(*risk_score))
            }
            DisplayState::Error(_) => None,
        }
    }

    /// Line under the risk: publisher for Danger, citations for Reliable
    pub fn detail_line(&self) -> String {
        match self {
            DisplayState::Danger { publisher, .. } => format!("Publisher: {}", publisher),
            DisplayState::Reliable { citation_count, .. } => format!("Citations: {}", citation_count),
            DisplayState::Error(message) => message.clone(),
        }
    }

    pub fn red_flags(&self) -> &[RedFlag] {
        match self {
            DisplayState::Danger { red_flags, .. } | DisplayState::Reliable { red_flags, .. } => red_flags,
            DisplayState::Error(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_result(is_predatory: bool, risk_score: f64, publisher: &str, oa_cited: f64) -> PredictionResult {
        PredictionResult {
            journal: None,
            is_predatory,
            risk_score,
            details: PredictionDetails {
                publisher: publisher.to_string(),
                oa_cited,
                oa_works: None,
                oa_found: None,
                cr_has_doi: None,
                impact_ratio: None,
                title: None,
            },
        }
    }

    #[test]
    fn test_render_danger() {
        let state = render(Ok(create_test_result(true, 87.0, "Acme Press", 3.0)));

        assert!(matches!(state, DisplayState::Danger { .. }));
        assert_eq!(state.headline(), "⚠️ DANGER");
        assert_eq!(state.risk_label().as_deref(), Some("87%"));
        assert_eq!(state.detail_line(), "Publisher: Acme Press");
    }

    #[test]
    fn test_render_reliable() {
        let state = render(Ok(create_test_result(false, 12.0, "Springer", 340.0)));

        assert!(matches!(state, DisplayState::Reliable { .. }));
        assert_eq!(state.headline(), "✅ RELIABLE");
        assert_eq!(state.risk_label().as_deref(), Some("12%"));
        assert_eq!(state.detail_line(), "Citations: 340");
    }

    #[test]
    fn test_render_transport_error() {
        let errors = [
            TransportError::Request("connection refused".to_string()),
            TransportError::Status(500),
            TransportError::Body("stream closed".to_string()),
        ];

        for error in errors {
            let state = render(Err(error));
            assert_eq!(state, DisplayState::Error(UNREACHABLE_MESSAGE.to_string()));
            assert_eq!(state.risk_label(), None);
            assert_eq!(state.detail_line(), UNREACHABLE_MESSAGE);
            assert!(state.red_flags().is_empty());
        }
    }

    #[test]
    fn test_render_keeps_out_of_range_score() {
        let state = render(Ok(create_test_result(true, 140.5, "Acme Press", 0.0)));
        assert_eq!(state.risk_label().as_deref(), Some("140.5%"));

        let state = render(Ok(create_test_result(false, -3.0, "Acme Press", 0.0)));
        assert_eq!(state.risk_label().as_deref(), Some("-3%"));
    }

    #[test]
    fn test_red_flags_unknown_publisher() {
        let result = create_test_result(true, 91.0, "Unknown", 10.0);
        assert_eq!(red_flags(&result.details), vec![RedFlag::UnknownPublisher]);
    }

    #[test]
    fn test_red_flags_no_citations_despite_works() {
        let mut result = create_test_result(true, 75.0, "Acme Press", 0.0);
        assert!(red_flags(&result.details).is_empty());

        result.details.oa_works = Some(250.0);
        assert_eq!(red_flags(&result.details), vec![RedFlag::NoCitationsDespiteWorks]);

        result.details.publisher = "Unknown".to_string();
        assert_eq!(
            red_flags(&result.details),
            vec![RedFlag::UnknownPublisher, RedFlag::NoCitationsDespiteWorks]
        );
    }

    #[test]
    fn test_red_flags_do_not_change_verdict() {
        let mut result = create_test_result(false, 20.0, "Unknown", 0.0);
        result.details.oa_works = Some(5.0);

        let state = render(Ok(result));

        assert!(matches!(state, DisplayState::Reliable { .. }));
        assert_eq!(state.red_flags().len(), 2);
    }

    #[test]
    fn test_format_risk() {
        assert_eq!(format_risk(0.0), "0%");
        assert_eq!(format_risk(50.5), "50.5%");
        assert_eq!(format_risk(100.0), "100%");
    }
}
