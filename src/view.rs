//! Screen descriptions derived from a [`QuizSession`], independent of how
//! they are drawn.

use crate::models::{GameState, Prompt, QuizSession};

pub const POST_SCORE_LABEL: &str = "Post My Score";
pub const PLAY_AGAIN_LABEL: &str = "Play Again";
pub const IMAGE_CAPTION: &str = "What is this?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Start {
        title: &'static str,
        tagline: &'static str,
    },
    Question {
        number: usize,
        total: usize,
        prompt: Prompt,
        answers: Vec<String>,
    },
    End {
        score: u32,
        total: usize,
        actions: [&'static str; 2],
    },
}

impl Screen {
    /// Number of selectable answers on this screen.
    pub fn answer_count(&self) -> usize {
        match self {
            Screen::Question { answers, .. } => answers.len(),
            _ => 0,
        }
    }
}

#[must_use]
pub fn render_view(session: &QuizSession) -> Screen {
    if let Some(question) = session.current_question() {
        return Screen::Question {
            number: session.current_index + 1,
            total: session.total(),
            prompt: question.prompt.clone(),
            answers: session.shuffled_answers.clone(),
        };
    }

    match session.state() {
        GameState::NotStarted => Screen::Start {
            title: session.variant.title(),
            tagline: session.variant.tagline(),
        },
        _ => Screen::End {
            score: session.score,
            total: session.total(),
            actions: [POST_SCORE_LABEL, PLAY_AGAIN_LABEL],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizVariant;

    #[test]
    fn test_start_screen_before_start() {
        let session = QuizSession::new(QuizVariant::Image);
        assert_eq!(
            render_view(&session),
            Screen::Start {
                title: "Image Quiz Game",
                tagline: "Identify what's shown in each image",
            }
        );
    }

    #[test]
    fn test_question_screen_while_playing() {
        let mut session = QuizSession::new(QuizVariant::Speed);
        session.start();

        match render_view(&session) {
            Screen::Question {
                number,
                total,
                prompt,
                answers,
            } => {
                assert_eq!(number, 1);
                assert_eq!(total, 4);
                assert_eq!(prompt, session.questions[0].prompt);
                assert_eq!(answers, session.shuffled_answers);
            }
            other => panic!("expected question screen, got {:?}", other),
        }
    }

    #[test]
    fn test_end_screen_after_last_answer() {
        let mut session = QuizSession::new(QuizVariant::Image);
        session.start();
        for _ in 0..4 {
            let correct = session.questions[session.current_index].correct.clone();
            session.answer(&correct);
        }

        let screen = render_view(&session);
        assert_eq!(
            screen,
            Screen::End {
                score: 4,
                total: 4,
                actions: ["Post My Score", "Play Again"],
            }
        );
        assert_eq!(screen.answer_count(), 0);
    }

    #[test]
    fn test_question_screen_follows_current_question() {
        let mut session = QuizSession::new(QuizVariant::Speed);
        session.start();
        session.answer("x");

        match render_view(&session) {
            Screen::Question { number, prompt, .. } => {
                assert_eq!(number, 2);
                assert_eq!(Some(&prompt), session.current_question().map(|q| &q.prompt));
            }
            other => panic!("expected question screen, got {:?}", other),
        }
    }

    #[test]
    fn test_view_does_not_mutate_session() {
        let mut session = QuizSession::new(QuizVariant::Image);
        session.start();
        let answers = session.shuffled_answers.clone();
        let _ = render_view(&session);
        let _ = render_view(&session);
        assert_eq!(session.shuffled_answers, answers);
    }
}
