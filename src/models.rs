use serde::Serialize;

/// Which of the two quiz games a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum QuizVariant {
    #[default]
    Image,
    Speed,
}

impl QuizVariant {
    pub fn title(self) -> &'static str {
        match self {
            QuizVariant::Image => "Image Quiz Game",
            QuizVariant::Speed => "Speed Quiz Game",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            QuizVariant::Image => "Identify what's shown in each image",
            QuizVariant::Speed => "Answer each question as fast as you can",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Text(String),
    Image { url: String, description: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: Prompt,
    pub correct: String,
    pub wrong: [String; 3],
}

impl Question {
    /// All four answer labels, wrong ones first, correct one last.
    pub fn answers(&self) -> Vec<String> {
        let mut answers: Vec<String> = self.wrong.to_vec();
        answers.push(self.correct.clone());
        answers
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub variant: QuizVariant,
    pub questions: Vec<Question>,
    pub score: u32,
    pub current_index: usize,
    pub shuffled_answers: Vec<String>,
    pub started: bool,
    pub ended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    Ended,
}

/// Events raised by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Start,
    Answer(String),
    PostScore,
}

/// Final result of an ended session, handed to the comment poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub variant: QuizVariant,
    pub score: u32,
    pub total: usize,
}

impl ScoreReport {
    pub fn comment_text(&self) -> String {
        format!(
            "I finished the {} with {} correct answers out of {}! 🎉",
            self.variant.title(),
            self.score,
            self.total
        )
    }
}

#[derive(Debug)]
pub enum PostRequest {
    Submit(ScoreReport),
}
