use crate::comments::{submit_score, PostContext};
use crate::logger;
use crate::models::PostRequest;
use crossbeam_channel::Receiver;
use std::io;
use std::thread;

/// Runs score posts off the UI thread. Each request is awaited and logged;
/// the worker exits once every sender is dropped.
pub fn spawn_comment_worker(
    ctx: PostContext,
    requests: Receiver<PostRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("trivia-quiz::comment_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::error(&format!("Failed to start comment runtime: {}", e));
                    return;
                }
            };

            while let Ok(request) = requests.recv() {
                match request {
                    PostRequest::Submit(report) => {
                        logger::log(&format!(
                            "Worker received score report {}",
                            serde_json::to_string(&report).unwrap_or_default()
                        ));
                        let outcome = rt.block_on(submit_score(&report, &ctx));
                        logger::log(&format!("Worker finished post: {:?}", outcome));
                    }
                }
            }

            logger::log("Comment worker channel disconnected, exiting");
        })
}
