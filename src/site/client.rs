use async_trait::async_trait;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};

use super::{CargoQuery, CargoTransport, Page, Row};
use crate::{
    config::Config,
    error::{ParserError, ParserResult},
};

/// HTTP session against the wiki `api.php` endpoint.
#[derive(Debug)]
pub struct CargoClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    api_url: String,
}

impl CargoClient {
    pub fn new(config: &Config) -> ParserResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        let q = Quota::per_second(config.rate_limit_per_second);

        Self {
            client,
            limiter: RateLimiter::direct(q),
            api_url: config.api_url.clone(),
        }
    }

    /// Underlying HTTP client, shared with the Data Dragon champion loader.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
    ) -> ParserResult<T> {
        // The wiki throttles anonymous sessions hard, we stay under its limits.
        self.limiter.until_ready().await;

        let res = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(ParserError::Reqwest)?;
        match res.status() {
            StatusCode::OK => {
                let body = res.bytes().await.map_err(ParserError::Reqwest)?;
                serde_json::from_slice(&body).map_err(ParserError::Serde)
            }
            status => Err(ParserError::Status(status)),
        }
    }
}

#[async_trait]
impl CargoTransport for CargoClient {
    async fn fetch_page(&self, query: &CargoQuery, page: Page) -> ParserResult<Vec<Row>> {
        tracing::trace!(
            "[SITE::CLIENT] cargoquery on {:?} (limit {}, offset {})",
            query.tables,
            page.limit,
            page.offset
        );

        let mut params = vec![
            ("action", "cargoquery".to_string()),
            ("format", "json".to_string()),
        ];
        params.extend(query.to_params());
        params.push(("limit", page.limit.to_string()));
        params.push(("offset", page.offset.to_string()));

        let response: CargoResponse = self.request(&params).await?;

        if let Some(error) = response.error {
            return Err(ParserError::Api {
                code: error.code,
                info: error.info,
            });
        }

        Ok(response.cargoquery.into_iter().map(|r| r.title).collect())
    }
}

/// Representation of the cargoquery action response.
#[derive(Deserialize, Debug)]
struct CargoResponse {
    #[serde(default)]
    cargoquery: Vec<CargoRowDto>,
    error: Option<ApiErrorDto>,
}

#[derive(Deserialize, Debug)]
struct CargoRowDto {
    title: Row,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDto {
    code: String,
    info: String,
}
