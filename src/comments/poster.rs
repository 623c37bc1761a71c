use crate::logger;
use crate::models::ScoreReport;
use async_trait::async_trait;
use std::sync::Arc;

pub type PostError = Box<dyn std::error::Error + Send + Sync>;

/// Submits a text comment on a platform post.
#[async_trait]
pub trait CommentPoster: Send + Sync {
    async fn submit_comment(&self, post_id: &str, text: &str) -> Result<(), PostError>;
}

/// Post identity plus the capability to comment on it. Either may be absent.
#[derive(Clone, Default)]
pub struct PostContext {
    pub post_id: Option<String>,
    pub poster: Option<Arc<dyn CommentPoster>>,
}

impl std::fmt::Debug for PostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostContext")
            .field("post_id", &self.post_id)
            .field("poster", &self.poster.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    Skipped(String),
    Failed(String),
}

/// Posts the score as a comment. Failures are logged and reported, never retried.
pub async fn submit_score(report: &ScoreReport, ctx: &PostContext) -> SubmitOutcome {
    let (Some(post_id), Some(poster)) = (ctx.post_id.as_deref(), ctx.poster.as_ref()) else {
        let reason = "Missing post id or comment API".to_string();
        logger::error(&reason);
        return SubmitOutcome::Skipped(reason);
    };

    let text = report.comment_text();
    logger::log(&format!("Posting score to {}: {}", post_id, text));

    match poster.submit_comment(post_id, &text).await {
        Ok(()) => {
            logger::log("Score posted successfully");
            SubmitOutcome::Posted
        }
        Err(e) => {
            let message = format!("Error posting score to comments: {}", e);
            logger::error(&message);
            SubmitOutcome::Failed(message)
        }
    }
}
