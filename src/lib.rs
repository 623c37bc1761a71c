pub mod comment_worker;
pub mod comments;
pub mod config;
pub mod input;
pub mod logger;
pub mod models;
pub mod questions;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use comment_worker::spawn_comment_worker;
pub use comments::{submit_score, CommentPoster, HttpCommentClient, PostContext, SubmitOutcome};
pub use config::QuizConfig;
pub use input::{map_key, step_selection, InputAction};
pub use models::{
    GameState, PostRequest, Prompt, Question, QuizEvent, QuizSession, QuizVariant, ScoreReport,
};
pub use ui::draw_screen;
pub use view::{render_view, Screen};
