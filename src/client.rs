/// Browser-backed collaborators: the chrome.* JS bridge and window.fetch

use crate::lookup::{ActiveTabProvider, PredictionService, TransportError};
use crate::prediction::PredictionResult;
use crate::settings::{Settings, STORAGE_KEY};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabTitle() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;
}

/// Active tab of the current window, via chrome.tabs.query
pub struct ChromeActiveTab;

impl ActiveTabProvider for ChromeActiveTab {
    async fn current_title(&self) -> String {
        match getActiveTabTitle().await {
            Ok(title) => title.as_string().unwrap_or_default(),
            Err(e) => {
                log::warn!("Failed to read active tab title: {:?}", e);
                String::new()
            }
        }
    }
}

/// Settings from chrome.storage.local, defaults when absent or unreadable
pub async fn load_settings() -> Settings {
    match read_settings().await {
        Ok(settings) => settings.validated(),
        Err(e) => {
            log::warn!("{}, using defaults", e);
            Settings::new()
        }
    }
}

async fn read_settings() -> Result<Settings, String> {
    let stored = getStorage(STORAGE_KEY)
        .await
        .map_err(|e| format!("Failed to get storage: {:?}", e))?;

    if stored.is_null() || stored.is_undefined() {
        return Ok(Settings::new());
    }

    serde_wasm_bindgen::from_value(stored).map_err(|e| format!("Failed to parse settings: {:?}", e))
}

/// `GET /predict` over window.fetch, one attempt, no timeout
pub struct HttpPredictionClient {
    settings: Settings,
}

impl HttpPredictionClient {
    pub fn new(settings: Settings) -> Self {
        HttpPredictionClient { settings }
    }
}

impl PredictionService for HttpPredictionClient {
    async fn fetch_prediction(&self, name: &str) -> Result<PredictionResult, TransportError> {
        let url = self
            .settings
            .predict_url(name)
            .map_err(|e| TransportError::Request(format!("invalid url: {}", e)))?;
        log::debug!("GET {}", url);

        let window = web_sys::window().ok_or_else(|| TransportError::Request("no window".to_string()))?;

        let response_js = JsFuture::from(window.fetch_with_str(url.as_str()))
            .await
            .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        let response: Response = response_js
            .dyn_into()
            .map_err(|e| TransportError::Request(format!("not a Response: {:?}", e)))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        let text_promise = response
            .text()
            .map_err(|e| TransportError::Body(format!("{:?}", e)))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|e| TransportError::Body(format!("{:?}", e)))?
            .as_string()
            .ok_or_else(|| TransportError::Body("body is not text".to_string()))?;

        Ok(PredictionResult::from_json(&body)?)
    }
}
