use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const ENV_GLOBAL: &str = "__CHROMA_AUTH_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub submit_delay_ms: u64,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            log_level: "info".into(),
        }
    }
}

impl RuntimeConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    serde_json::from_str(raw).with_context(|| format!("invalid {ENV_GLOBAL} payload"))
}

#[cfg(target_arch = "wasm32")]
fn read_env_js() -> anyhow::Result<Option<String>> {
    // Optional global object: window.__CHROMA_AUTH_ENV = { submit_delay_ms: 2000, log_level: "info" }
    let w = crate::utils::window::window().map_err(anyhow::Error::msg)?;
    let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into())
        .map_err(|_| anyhow::anyhow!("cannot read window.{ENV_GLOBAL}"))?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&any)
        .map_err(|_| anyhow::anyhow!("window.{ENV_GLOBAL} is not serializable"))?;
    Ok(json.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_env_js() -> anyhow::Result<Option<String>> {
    Ok(None)
}

/// Reads the runtime config from globals, falling back to defaults.
///
/// The error, if any, is returned alongside so the caller can report it once
/// logging is up.
pub fn load() -> (RuntimeConfig, Option<anyhow::Error>) {
    match read_env_js().and_then(|raw| raw.map(|r| parse_runtime_config(&r)).transpose()) {
        Ok(Some(cfg)) => (cfg, None),
        Ok(None) => (RuntimeConfig::default(), None),
        Err(err) => (RuntimeConfig::default(), Some(err)),
    }
}

pub fn install(cfg: RuntimeConfig) {
    if RUNTIME_CONFIG.set(cfg).is_err() {
        log::debug!("Runtime config already installed; keeping the first one");
    }
}

pub fn runtime_config() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| load().0)
}

pub fn submit_delay() -> Duration {
    runtime_config().submit_delay()
}
