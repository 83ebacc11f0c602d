use directories::UserDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::constants::{Message, API_URL_ENV, CONFIG_DIR, CONFIG_FILE_NAME};
use crate::external_api::spacex_api::DEFAULT_API_BASE_URL;
use crate::external_api::ApiError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base url of the launches API, `/launches` is appended to it
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Ask the user for the config values. An empty answer keeps the default.
    pub fn new<R, W>(mut input: R, mut output: W) -> Result<Self, ApiError>
    where
        R: BufRead,
        W: Write,
    {
        output.write_all(
            Message::EnterApiBaseUrl(DEFAULT_API_BASE_URL.to_string())
                .to_formatted_string()
                .as_bytes(),
        )?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self {
            api_base_url: validate_url(answer)?,
        })
    }

    /// Read the config from a json file
    pub fn get_config(path_to_config: &Path) -> Result<Self, ApiError> {
        let file = File::open(path_to_config)?;
        serde_json::from_reader(file)
            .map_err(|_| ApiError::NotParseConfig(path_to_config.display().to_string()))
    }

    /// `LAUNCHES_API_URL` if set, else the config file, else defaults
    pub fn load() -> Result<Self, ApiError> {
        Self::load_from(&config_path()?, std::env::var(API_URL_ENV).ok())
    }

    /// The override replaces every field the file could set, so the file is
    /// not read at all when it is present.
    pub fn load_from(path_to_config: &Path, api_url_override: Option<String>) -> Result<Self, ApiError> {
        if let Some(value) = non_empty(api_url_override) {
            return Self::default().with_api_url_override(Some(value));
        }
        if path_to_config.exists() {
            tracing::debug!(path = %path_to_config.display(), "Reading config");
            Self::get_config(path_to_config)
        } else {
            Ok(Self::default())
        }
    }

    /// An empty or blank value counts as unset
    pub fn with_api_url_override(mut self, api_base_url: Option<String>) -> Result<Self, ApiError> {
        if let Some(value) = non_empty(api_base_url) {
            self.api_base_url = validate_url(&value)?;
        }
        Ok(self)
    }

    pub fn save(&self, path_to_config: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent).map_err(|_| ApiError::CantCreateConfig)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path_to_config, content).map_err(|_| ApiError::CantCreateConfig)
    }
}

/// `~/.config/launches/config.json`
pub fn config_path() -> Result<PathBuf, ApiError> {
    UserDirs::new()
        .ok_or(ApiError::NotFoundUserDir)
        .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE_NAME))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// The entered string must be a URL
fn validate_url(value: &str) -> Result<String, ApiError> {
    let regex = Regex::new(r"^https?://.+$").map_err(|e| ApiError::Parse(e.to_string()))?;
    let value = value.trim();
    if !regex.is_match(value) {
        return Err(ApiError::InvalidUrl);
    }
    Ok(value.trim_end_matches('/').to_string())
}
