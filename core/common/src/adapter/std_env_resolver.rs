//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{ApiKey, StateDir};
use crate::error::Error;
use crate::ports::outbound::env_resolver::{
    normalize_api_base, API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE,
};
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn api_key(&self) -> Result<ApiKey, Error> {
        non_empty_var(API_KEY_ENV)
            .map(ApiKey::new)
            .ok_or_else(|| Error::env(format!("{} environment variable not set", API_KEY_ENV)))
    }

    fn api_base(&self) -> String {
        let base = non_empty_var(API_BASE_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        normalize_api_base(&base)
    }

    fn resolve_state_dir(&self) -> Result<StateDir, Error> {
        if let Some(home) = non_empty_var("GCLI_HOME") {
            return Ok(StateDir::new(PathBuf::from(home)));
        }

        let state_base = non_empty_var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                non_empty_var("HOME").map(|h| PathBuf::from(h).join(".local").join("state"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(StateDir::new(state_base.join("gcli")))
    }
}
