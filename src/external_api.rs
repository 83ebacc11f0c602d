pub mod spacex_api;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode, Url,
};
use thiserror::Error;

const APPLICATION_JSON: &str = "application/json";
const APP_USER_AGENT: &str = concat!("launches/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Api error {0}: {1}")]
    Api(StatusCode, String),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("Year must be a 4-digit number between {min} and {max}, got: '{value}'")]
    InvalidYear { value: String, min: i32, max: i32 },
    #[error("Couldn't create a config")]
    CantCreateConfig,
    #[error("Couldn't parse the config at path: <{0}>")]
    NotParseConfig(String),
    #[error("Failed to fetch launches: {0}")]
    FetchFailed(String),
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Basic api client
#[derive(Debug)]
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {
    fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        // query_pairs_mut leaves a bare '?' behind on an empty query
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        // Raw bytes: `text()` would swap invalid UTF-8 for U+FFFD and let it decode
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Api(status, String::from_utf8_lossy(&body).into_owned()));
        }

        serde_json::from_slice(&body).map_err(ApiError::Serde)
    }

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(Self::get_default_headers())
            .build()?;

        let mut parse_base_url = Url::parse(base_url).map_err(|e| ApiError::Parse(e.to_string()))?;
        // Url::join drops the last path segment unless it ends with '/'
        if !parse_base_url.path().ends_with('/') {
            let path = format!("{}/", parse_base_url.path());
            parse_base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url: parse_base_url,
        })
    }

    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint, query)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }
}
