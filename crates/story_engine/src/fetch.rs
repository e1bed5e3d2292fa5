use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use story_core::{ObjectId, Story};
use story_logging::story_debug;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// Performs a GET against a search URL and decodes the stories in the body.
#[async_trait::async_trait]
pub trait StoryFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<Story>, FetchError>;
}

/// Body of a search response. Only `hits` is read.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<HitRecord>,
}

#[derive(Debug, Deserialize)]
struct HitRecord {
    title: Option<String>,
    url: Option<String>,
    author: Option<String>,
    num_comments: Option<u32>,
    points: Option<i64>,
    #[serde(rename = "objectID")]
    object_id: ObjectId,
}

impl From<HitRecord> for Story {
    fn from(hit: HitRecord) -> Self {
        Story {
            title: hit.title.unwrap_or_default(),
            url: hit.url.unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
            object_id: hit.object_id,
        }
    }
}

/// Decodes a search response body into stories, preserving server order.
pub(crate) fn decode_stories(body: &[u8]) -> Result<Vec<Story>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(response.hits.into_iter().map(Story::from).collect())
}

#[derive(Debug, Clone)]
pub struct ReqwestStoryFetcher {
    settings: FetchSettings,
}

impl ReqwestStoryFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl StoryFetcher for ReqwestStoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<Story>, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        // A missing header is tolerated; serde decides whether the body is usable.
        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        story_debug!("Fetched {} bytes from {}", bytes.len(), url);

        decode_stories(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
