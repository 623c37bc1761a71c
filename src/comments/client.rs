use crate::comments::poster::{CommentPoster, PostError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Posts comments to the platform's HTTP comment endpoint.
#[derive(Debug)]
pub struct HttpCommentClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    id: &'a str,
    text: &'a str,
}

impl HttpCommentClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, String> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(format!("Invalid comments URL: {:?}", base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoint: format!("{}/comments", base_url),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CommentPoster for HttpCommentClient {
    async fn submit_comment(&self, post_id: &str, text: &str) -> Result<(), PostError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&CommentBody { id: post_id, text });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("Comment API returned status {}", status).into());
        }
        Ok(())
    }
}
