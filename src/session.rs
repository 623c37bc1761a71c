use crate::logger;
use crate::models::{GameState, Question, QuizEvent, QuizSession, QuizVariant, ScoreReport};
use crate::questions::questions_for;
use rand::seq::SliceRandom;
use rand::Rng;

impl QuizSession {
    pub fn new(variant: QuizVariant) -> Self {
        Self::with_questions(variant, questions_for(variant))
    }

    pub fn with_questions(variant: QuizVariant, questions: Vec<Question>) -> Self {
        Self {
            variant,
            questions,
            score: 0,
            current_index: 0,
            shuffled_answers: Vec::new(),
            started: false,
            ended: false,
        }
    }

    pub fn state(&self) -> GameState {
        if !self.started {
            GameState::NotStarted
        } else if self.ended {
            GameState::Ended
        } else {
            GameState::Playing
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.state() == GameState::Playing {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    pub fn start(&mut self) {
        self.start_with(&mut rand::thread_rng());
    }

    /// Resets the session and loads the first question. Valid from any state.
    pub fn start_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.current_index = 0;
        self.ended = false;
        self.started = true;
        logger::log(&format!("Starting {}", self.variant.title()));
        self.load_question(0, rng);
    }

    pub fn answer(&mut self, selected: &str) {
        self.answer_with(selected, &mut rand::thread_rng());
    }

    /// Scores `selected` against the current question and advances.
    /// Ignored unless the session is playing.
    pub fn answer_with<R: Rng + ?Sized>(&mut self, selected: &str, rng: &mut R) {
        if self.state() != GameState::Playing {
            return;
        }

        let correct = &self.questions[self.current_index].correct;
        if selected == correct.as_str() {
            self.score += 1;
        }

        self.load_question(self.current_index + 1, rng);
    }

    /// Snapshot of the final result; `None` until the session has ended.
    pub fn score_report(&self) -> Option<ScoreReport> {
        if self.state() != GameState::Ended {
            return None;
        }
        Some(ScoreReport {
            variant: self.variant,
            score: self.score,
            total: self.total(),
        })
    }

    pub fn handle_event(&mut self, event: QuizEvent) -> Option<ScoreReport> {
        self.handle_event_with(event, &mut rand::thread_rng())
    }

    pub fn handle_event_with<R: Rng + ?Sized>(
        &mut self,
        event: QuizEvent,
        rng: &mut R,
    ) -> Option<ScoreReport> {
        match event {
            QuizEvent::Start => {
                self.start_with(rng);
                None
            }
            QuizEvent::Answer(label) => {
                self.answer_with(&label, rng);
                None
            }
            QuizEvent::PostScore => {
                let report = self.score_report();
                if report.is_none() {
                    logger::log("Post score requested before the game ended; ignoring");
                }
                report
            }
        }
    }

    // Past the last question the previous index and answers are kept.
    fn load_question<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let Some(question) = self.questions.get(index) else {
            self.ended = true;
            logger::log(&format!(
                "{} ended with score {}/{}",
                self.variant.title(),
                self.score,
                self.total()
            ));
            return;
        };

        let mut answers = question.answers();
        answers.shuffle(rng);

        self.current_index = index;
        self.shuffled_answers = answers;
    }
}
