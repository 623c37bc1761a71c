pub mod layout;
mod quiz;
mod start;
mod summary;

pub use layout::{calculate_question_chunks, calculate_screen_chunks};
pub use quiz::draw_question;
pub use start::draw_start;
pub use summary::draw_end;

use crate::view::Screen;
use ratatui::Frame;

pub fn draw_screen(f: &mut Frame, screen: &Screen, selected: usize) {
    match screen {
        Screen::Start { title, tagline } => draw_start(f, title, tagline),
        Screen::Question {
            number,
            total,
            prompt,
            answers,
        } => draw_question(f, *number, *total, prompt, answers, selected),
        Screen::End {
            score,
            total,
            actions,
        } => draw_end(f, *score, *total, actions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuizSession, QuizVariant};
    use crate::view::render_view;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(screen: &Screen, selected: usize) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_screen(f, screen, selected)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_start_screen() {
        let session = QuizSession::new(QuizVariant::Image);
        let out = render_to_string(&render_view(&session), 0);
        assert!(out.contains("Image Quiz Game"));
        assert!(out.contains("Identify what's shown in each image"));
        assert!(out.contains("Start Game"));
    }

    #[test]
    fn test_draw_question_screen_lists_answers() {
        let mut session = QuizSession::new(QuizVariant::Speed);
        session.start();
        let out = render_to_string(&render_view(&session), 0);

        assert!(out.contains("Question 1 / 4"));
        assert!(out.contains("What is the capital of Australia?"));
        for answer in &session.shuffled_answers {
            assert!(out.contains(answer.as_str()), "missing answer {}", answer);
        }
    }

    #[test]
    fn test_draw_image_question_shows_caption() {
        let mut session = QuizSession::new(QuizVariant::Image);
        session.start();
        let out = render_to_string(&render_view(&session), 1);
        assert!(out.contains("What is this?"));
        assert!(out.contains("Quiz image"));
        assert!(out.contains("i.redd.it"));
    }

    #[test]
    fn test_draw_end_screen() {
        let mut session = QuizSession::new(QuizVariant::Image);
        session.start();
        for _ in 0..4 {
            session.answer("nope");
        }
        let out = render_to_string(&render_view(&session), 0);
        assert!(out.contains("Your Score: 0/4"));
        assert!(out.contains("Post My Score"));
        assert!(out.contains("Play Again"));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let mut session = QuizSession::new(QuizVariant::Speed);
        session.start();
        let screen = render_view(&session);
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_screen(f, &screen, 0)).unwrap();
    }
}
