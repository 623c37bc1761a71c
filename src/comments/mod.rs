pub mod client;
pub mod poster;

pub use client::{HttpCommentClient, DEFAULT_TIMEOUT_SECS};
pub use poster::{submit_score, CommentPoster, PostContext, PostError, SubmitOutcome};
