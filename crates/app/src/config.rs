use shared_types::{ClientConfig, PredictorConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<PredictorConfig> = OnceLock::new();

/// `predictor.toml` from the workspace root, embedded at build time so the
/// web build needs no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../predictor.toml");

/// Build-time override for `api_base`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("PREDICTOR_API_BASE");

/// Parse the embedded config once and return it.
///
/// If the file is unparseable every field falls back to its default.
pub fn predictor_config() -> &'static PredictorConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(CONFIG_TOML);
        if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.is_empty()) {
            config.api_base = Some(base.to_string());
        }
        tracing::info!(
            api_base = config.api_base.as_deref().unwrap_or("<page origin>"),
            predict_path = %config.predict_path,
            "Predictor config loaded"
        );
        config
    })
}

fn parse_config(contents: &str) -> PredictorConfig {
    match toml::from_str::<ClientConfig>(contents) {
        Ok(config) => config.predictor,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse predictor.toml, using defaults");
            PredictorConfig::default()
        }
    }
}
