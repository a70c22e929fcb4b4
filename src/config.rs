//! Configuration resolution.
//!
//! The API endpoint and access token come from the cf CLI: either passed in
//! explicitly (flags or `CF_API` / `CF_ACCESS_TOKEN`) or read from the
//! config file the cf CLI maintains after `cf login`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CfError, Result};

/// Fully resolved settings for a report run.
#[derive(Clone)]
pub struct Config {
    /// Cloud Controller endpoint (e.g., `https://api.sys.example.com`).
    pub api_url: String,
    /// Access token, optionally prefixed with `bearer `.
    pub access_token: String,
    /// Suppress progress logging.
    pub quiet: bool,
    /// Disable TLS certificate verification.
    pub insecure_skip_verify: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("quiet", &self.quiet)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish_non_exhaustive()
    }
}

/// Values supplied on the command line or via environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub access_token: Option<String>,
    pub quiet: bool,
    pub insecure_skip_verify: bool,
}

/// The subset of `~/.cf/config.json` this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CfConfigFile {
    /// API endpoint targeted by `cf api`.
    #[serde(default)]
    pub target: Option<String>,
    /// Token stored by `cf login`, as `bearer <jwt>`.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Set by `cf api --skip-ssl-validation`.
    #[serde(rename = "SSLDisabled", default)]
    pub ssl_disabled: bool,
}

impl CfConfigFile {
    /// Load the cf CLI config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Default location: `$CF_HOME/.cf/config.json`, else `~/.cf/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        env::var_os("CF_HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .map(|home| home.join(".cf").join("config.json"))
    }
}

impl Config {
    /// Resolve configuration, consulting the cf CLI config file only for
    /// values not given explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::ConfigMissing`] if no endpoint or token can be
    /// found, or an error if the config file exists but cannot be parsed.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let needs_file = overrides.api_url.is_none() || overrides.access_token.is_none();
        let file = match CfConfigFile::default_path() {
            Some(path) if needs_file && path.exists() => {
                tracing::debug!(path = %path.display(), "reading cf CLI config");
                Some(CfConfigFile::load(&path)?)
            }
            _ => None,
        };
        Self::from_parts(overrides, file)
    }

    /// Merge explicit overrides with an already loaded cf CLI config file.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::ConfigMissing`] if no endpoint or token is
    /// available from either source.
    pub fn from_parts(overrides: Overrides, file: Option<CfConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let api_url = overrides
            .api_url
            .or(file.target)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CfError::ConfigMissing(
                    "no API endpoint; run `cf api` or set CF_API".to_string(),
                )
            })?;

        let access_token = overrides
            .access_token
            .or(file.access_token)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CfError::ConfigMissing(
                    "no access token; run `cf login` or set CF_ACCESS_TOKEN".to_string(),
                )
            })?;

        Ok(Self {
            api_url,
            access_token,
            quiet: overrides.quiet,
            insecure_skip_verify: overrides.insecure_skip_verify || file.ssl_disabled,
        })
    }
}
