use reqwest::{Client, StatusCode};

use crate::config::AppConfig;
use crate::models::comic::{Comic, FetchOutcome};
use crate::models::error::ComicError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the upstream comic API.
///
/// Every lookup collapses failures into a [`FetchOutcome`]; nothing here
/// returns an error to the caller once the service is built.
#[derive(Debug, Clone)]
pub struct ComicService {
    base_url: String,
    client: Client,
}

impl ComicService {
    pub fn new(config: &AppConfig) -> Result<Self, ComicError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(ComicService {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    pub async fn fetch_latest(&self) -> FetchOutcome {
        let url = format!("{}/info.0.json", self.base_url);

        match self.get_comic(&url).await {
            Ok(comic) => FetchOutcome::Found(comic),
            Err(ComicError::ComicNotFound) => {
                tracing::warn!(%url, "latest comic endpoint returned 404");
                FetchOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "failed to fetch latest comic");
                FetchOutcome::Failed
            }
        }
    }

    pub async fn fetch_by_number(&self, num: i64) -> FetchOutcome {
        let url = format!("{}/{}/info.0.json", self.base_url, num);

        match self.get_comic(&url).await {
            Ok(comic) => FetchOutcome::Found(comic),
            Err(ComicError::ComicNotFound) => {
                tracing::info!(num, "comic not found");
                FetchOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(num, error = %e, "failed to fetch comic");
                FetchOutcome::Failed
            }
        }
    }

    pub async fn latest_num(&self) -> Option<i64> {
        self.fetch_latest().await.ok().map(|comic| comic.num)
    }

    async fn get_comic(&self, url: &str) -> Result<Comic, ComicError> {
        tracing::debug!(url, "requesting comic");

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Comic>().await?),
            StatusCode::NOT_FOUND => Err(ComicError::ComicNotFound),
            status => Err(ComicError::UnexpectedStatus(status)),
        }
    }
}
