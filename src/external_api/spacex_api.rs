pub mod models;

use super::{ApiError, BaseApiClient};
use models::launch::Launch;

pub const DEFAULT_API_BASE_URL: &str = "https://api.spacexdata.com/v4/";
const LAUNCHES_ENDPOINT: &str = "launches";

#[derive(Debug)]
pub struct SpacexApi {
    pub client: BaseApiClient,
}

impl SpacexApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: BaseApiClient::new(base_url)?,
        })
    }

    /// All launches, or only the given year's when the API honours `?year=`
    pub async fn get_launches(&self, year: Option<&str>) -> Result<Vec<Launch>, ApiError> {
        let query: Vec<(&str, &str)> = year.map(|year| vec![("year", year)]).unwrap_or_default();
        self.client.get::<Vec<Launch>>(LAUNCHES_ENDPOINT, &query).await
    }
}

#[cfg(test)]
impl SpacexApi {
    pub fn mock(url: &str) -> Self {
        Self::new(url).unwrap()
    }

    pub async fn mock_get_launches(
        server: &mut mockito::ServerGuard,
        year: Option<&str>,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        let query = match year {
            Some(year) => mockito::Matcher::UrlEncoded("year".to_string(), year.to_string()),
            None => mockito::Matcher::Missing,
        };
        server
            .mock("GET", "/launches")
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_default_base_url() {
        let api = SpacexApi::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(api.client.base_url.as_str(), "https://api.spacexdata.com/v4/");
    }

    #[tokio::test]
    async fn test_get_launches_without_year() {
        let mut server = Server::new_async().await;
        let mock = SpacexApi::mock_get_launches(&mut server, None, 200, fixtures::MIXED_YEARS).await;

        let api = SpacexApi::mock(&server.url());
        let launches = api.get_launches(None).await.unwrap();

        let ids: Vec<&str> = launches.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_launches_sends_year_query() {
        let mut server = Server::new_async().await;
        let mock = SpacexApi::mock_get_launches(&mut server, Some("2020"), 200, "[]").await;

        let api = SpacexApi::mock(&server.url());
        let launches = api.get_launches(Some("2020")).await.unwrap();

        assert!(launches.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_launches_server_error() {
        let mut server = Server::new_async().await;
        let _mock = SpacexApi::mock_get_launches(&mut server, None, 500, "{}").await;

        let api = SpacexApi::mock(&server.url());
        let result = api.get_launches(None).await;

        assert!(matches!(result, Err(ApiError::Api(_, _))));
    }

    #[tokio::test]
    async fn test_get_launches_not_an_array() {
        let mut server = Server::new_async().await;
        let _mock = SpacexApi::mock_get_launches(&mut server, None, 200, r#"{"docs": []}"#).await;

        let api = SpacexApi::mock(&server.url());
        let result = api.get_launches(None).await;

        assert!(matches!(result, Err(ApiError::Serde(_))));
    }

    #[tokio::test]
    async fn test_get_launches_invalid_utf8_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/launches")
            .match_query(mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(fixtures::invalid_utf8_launches())
            .create_async()
            .await;

        let api = SpacexApi::mock(&server.url());
        let result = api.get_launches(None).await;

        assert!(matches!(result, Err(ApiError::Serde(_))), "Expected decode error, got {result:?}");
    }
}
