use crate::comments::{HttpCommentClient, PostContext};
use crate::logger;
use crate::models::QuizVariant;
use std::sync::Arc;

pub const POST_ID_VAR: &str = "QUIZ_POST_ID";
pub const COMMENTS_URL_VAR: &str = "QUIZ_COMMENTS_URL";
pub const COMMENTS_TOKEN_VAR: &str = "QUIZ_COMMENTS_TOKEN";
pub const LOG_FILE_VAR: &str = "QUIZ_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub variant: QuizVariant,
    pub post_id: Option<String>,
    pub comments_url: Option<String>,
    pub api_token: Option<String>,
    pub log_path: String,
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds the config from CLI arguments (program name already stripped)
    /// and an environment lookup. Flags win over the environment.
    pub fn from_sources<I, F>(args: I, env: F) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let mut config = Self {
            variant: QuizVariant::default(),
            post_id: non_empty(POST_ID_VAR),
            comments_url: non_empty(COMMENTS_URL_VAR),
            api_token: non_empty(COMMENTS_TOKEN_VAR),
            log_path: non_empty(LOG_FILE_VAR)
                .unwrap_or_else(|| logger::DEFAULT_LOG_FILE.to_string()),
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--image" => config.variant = QuizVariant::Image,
                "--speed" => config.variant = QuizVariant::Speed,
                "--post" => {
                    let id = args
                        .next()
                        .filter(|v| !v.trim().is_empty() && !v.starts_with("--"))
                        .ok_or_else(|| "--post requires a post id".to_string())?;
                    config.post_id = Some(id);
                }
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }

        Ok(config)
    }

    /// A missing URL or an unusable client leaves the poster unset.
    pub fn post_context(&self) -> PostContext {
        let poster = match self.comments_url.as_deref() {
            Some(url) => match HttpCommentClient::new(url, self.api_token.clone()) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn crate::comments::CommentPoster>),
                Err(e) => {
                    logger::error(&e);
                    None
                }
            },
            None => {
                logger::log("No comments URL configured; score posting disabled");
                None
            }
        };

        PostContext {
            post_id: self.post_id.clone(),
            poster,
        }
    }
}
