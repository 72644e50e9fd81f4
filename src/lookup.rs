/// One popup open: read the tab title, query the prediction API, pick a verdict

use crate::prediction::PredictionResult;
use crate::title::normalize;
use crate::verdict::{render, DisplayState};
use thiserror::Error;

/// Anything that stops a request from producing a `PredictionResult`
///
/// Every variant is shown to the user the same way; the variants only
/// exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("failed to decode prediction: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of the active tab's title
#[allow(async_fn_in_trait)]
pub trait ActiveTabProvider {
    /// Title of the active tab, or "" when none is available
    async fn current_title(&self) -> String;
}

/// The external prediction API
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn fetch_prediction(&self, name: &str) -> Result<PredictionResult, TransportError>;
}

/// Run the whole Loading phase and return the terminal state
pub async fn run_lookup<T, S>(tab: &T, service: &S) -> DisplayState
where
    T: ActiveTabProvider,
    S: PredictionService,
{
    let raw_title = tab.current_title().await;
    let name = normalize(&raw_title);

    if name.is_empty() {
        log::debug!("Tab title {:?} normalized to an empty name", raw_title);
    }
    log::info!("Looking up journal {:?}", name);

    let outcome = service.fetch_prediction(&name).await;
    match &outcome {
        Ok(result) => log::info!(
            "Prediction for {:?}: predatory={} risk={}",
            name,
            result.is_predatory,
            result.risk_score
        ),
        Err(e) => log::warn!("Prediction for {:?} failed: {}", name, e),
    }

    render(outcome)
}
