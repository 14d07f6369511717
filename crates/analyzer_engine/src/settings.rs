use url::Url;

use crate::EngineError;

/// Where the analysis service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
/// The single endpoint of the service contract.
pub const ANALYZE_PATH: &str = "/api/analyze";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    base_url: Url,
}

impl ClientSettings {
    pub fn new(base_url: &str) -> Result<Self, EngineError> {
        let parsed = Url::parse(base_url).map_err(|source| EngineError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(EngineError::NotABase(base_url.to_string()));
        }
        Ok(Self { base_url: parsed })
    }

    /// Full analyze URL. A path prefix on the base URL is kept.
    pub fn endpoint(&self) -> Url {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        match base.join(ANALYZE_PATH.trim_start_matches('/')) {
            Ok(url) => url,
            // A relative path always joins onto a base URL.
            Err(_) => base,
        }
    }
}
