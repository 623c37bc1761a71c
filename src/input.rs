use crate::models::QuizEvent;
use crate::view::Screen;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(QuizEvent),
    MoveSelection(isize),
    Quit,
    None,
}

pub fn map_key(screen: &Screen, selected: usize, key: KeyEvent) -> InputAction {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return InputAction::Quit;
    }

    match screen {
        Screen::Start { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => InputAction::Dispatch(QuizEvent::Start),
            _ => InputAction::None,
        },
        Screen::Question { answers, .. } => match key.code {
            KeyCode::Up => InputAction::MoveSelection(-1),
            KeyCode::Down => InputAction::MoveSelection(1),
            KeyCode::Enter => answer_at(answers, selected),
            KeyCode::Char(c @ '1'..='9') => {
                let position = c as usize - '1' as usize;
                answer_at(answers, position)
            }
            _ => InputAction::None,
        },
        Screen::End { .. } => match key.code {
            KeyCode::Char('p') => InputAction::Dispatch(QuizEvent::PostScore),
            KeyCode::Char('r') | KeyCode::Enter => InputAction::Dispatch(QuizEvent::Start),
            _ => InputAction::None,
        },
    }
}

fn answer_at(answers: &[String], position: usize) -> InputAction {
    match answers.get(position) {
        Some(label) => InputAction::Dispatch(QuizEvent::Answer(label.clone())),
        None => InputAction::None,
    }
}

/// Moves a highlight by `delta`, wrapping around `count` entries.
pub fn step_selection(selected: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    (selected as isize + delta).rem_euclid(count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prompt;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn question_screen() -> Screen {
        Screen::Question {
            number: 1,
            total: 4,
            prompt: Prompt::Text("Q".to_string()),
            answers: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
        }
    }

    fn end_screen() -> Screen {
        Screen::End {
            score: 2,
            total: 4,
            actions: ["Post My Score", "Play Again"],
        }
    }

    #[test]
    fn test_start_screen_keys() {
        let screen = Screen::Start {
            title: "t",
            tagline: "s",
        };
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Enter)),
            InputAction::Dispatch(QuizEvent::Start)
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Char('s'))),
            InputAction::Dispatch(QuizEvent::Start)
        );
        assert_eq!(map_key(&screen, 0, key(KeyCode::Char('1'))), InputAction::None);
    }

    #[test]
    fn test_number_keys_pick_answer_by_position() {
        let screen = question_screen();
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Char('1'))),
            InputAction::Dispatch(QuizEvent::Answer("A".to_string()))
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Char('4'))),
            InputAction::Dispatch(QuizEvent::Answer("D".to_string()))
        );
        assert_eq!(map_key(&screen, 0, key(KeyCode::Char('5'))), InputAction::None);
    }

    #[test]
    fn test_enter_answers_highlighted() {
        let screen = question_screen();
        assert_eq!(
            map_key(&screen, 2, key(KeyCode::Enter)),
            InputAction::Dispatch(QuizEvent::Answer("C".to_string()))
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Down)),
            InputAction::MoveSelection(1)
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Up)),
            InputAction::MoveSelection(-1)
        );
    }

    #[test]
    fn test_end_screen_keys() {
        let screen = end_screen();
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Char('p'))),
            InputAction::Dispatch(QuizEvent::PostScore)
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Char('r'))),
            InputAction::Dispatch(QuizEvent::Start)
        );
        assert_eq!(
            map_key(&screen, 0, key(KeyCode::Enter)),
            InputAction::Dispatch(QuizEvent::Start)
        );
    }

    #[test]
    fn test_quit_keys_work_everywhere() {
        for screen in [question_screen(), end_screen()] {
            assert_eq!(map_key(&screen, 0, key(KeyCode::Esc)), InputAction::Quit);
            assert_eq!(map_key(&screen, 0, key(KeyCode::Char('q'))), InputAction::Quit);
        }
    }

    #[test]
    fn test_step_selection_wraps() {
        assert_eq!(step_selection(0, -1, 4), 3);
        assert_eq!(step_selection(3, 1, 4), 0);
        assert_eq!(step_selection(1, 1, 4), 2);
        assert_eq!(step_selection(2, 1, 0), 0);
    }
}
