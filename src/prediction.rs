/// Response types for the prediction API
use serde::{Deserialize, Serialize};

/// Verdict returned by `GET /predict?name=...`
///
/// `is_predatory`, `risk_score` and `details` are required; decoding fails
/// if any of them is missing or has the wrong JSON type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Name the service analyzed (echo of the query)
    #[serde(default)]
    pub journal: Option<String>,
    pub is_predatory: bool,
    /// 0-100, not range checked
    pub risk_score: f64,
    pub details: PredictionDetails,
}

/// Metrics the service gathered about the journal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionDetails {
    #[serde(rename = "Publisher")]
    pub publisher: String,
    pub oa_cited: f64,
    #[serde(default)]
    pub oa_works: Option<f64>,
    #[serde(default)]
    pub oa_found: Option<f64>,
    #[serde(default)]
    pub cr_has_doi: Option<f64>,
    #[serde(rename = "Impact_Ratio", default)]
    pub impact_ratio: Option<f64>,
    #[serde(rename = "Titre", default)]
    pub title: Option<String>,
}

impl PredictionResult {
    /// Decode a response body
    pub fn from_json(body: &str) -> Result<PredictionResult, serde_json::Error> {
        serde_json::from_str(body)
    }
}
