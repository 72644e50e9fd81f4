/// Endpoint settings, optionally overridden from chrome.storage.local

use serde::{Deserialize, Serialize};
use url::Url;

/// Storage key holding a serialized `Settings` object
pub const STORAGE_KEY: &str = "predatory_detector_settings";

/// Local prediction server started with `uvicorn api:app`
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const PREDICT_PATH: &str = "predict";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            api_base: default_api_base(),
        }
    }

    /// Build `<api_base>/predict?name=<name>` with the name form-encoded
    pub fn predict_url(&self, name: &str) -> Result<Url, url::ParseError> {
        let mut base = Url::parse(&self.api_base)?;

        // Url::join replaces the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(PREDICT_PATH)?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url)
    }

    /// Replace an unusable `api_base` with the default
    pub fn validated(self) -> Self {
        match Url::parse(&self.api_base) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self,
            _ => {
                log::warn!("Ignoring invalid api_base {:?}, using {}", self.api_base, DEFAULT_API_BASE);
                Settings::new()
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
