use crate::models::{Prompt, Question, QuizVariant};

const IMAGE_URL: &str = "https://i.redd.it/1b0t4xk5q5xb1.jpg";
pub const IMAGE_DESCRIPTION: &str = "Quiz image";

fn image_question(correct: &str, wrong: [&str; 3]) -> Question {
    Question {
        prompt: Prompt::Image {
            url: IMAGE_URL.to_string(),
            description: IMAGE_DESCRIPTION.to_string(),
        },
        correct: correct.to_string(),
        wrong: wrong.map(str::to_string),
    }
}

fn text_question(text: &str, correct: &str, wrong: [&str; 3]) -> Question {
    Question {
        prompt: Prompt::Text(text.to_string()),
        correct: correct.to_string(),
        wrong: wrong.map(str::to_string),
    }
}

pub fn image_questions() -> Vec<Question> {
    vec![
        image_question(
            "Golden Gate Bridge",
            ["Brooklyn Bridge", "London Bridge", "Sydney Harbour Bridge"],
        ),
        image_question(
            "Eiffel Tower",
            ["Leaning Tower of Pisa", "Empire State Building", "Big Ben"],
        ),
        image_question(
            "Mona Lisa",
            ["The Starry Night", "The Scream", "Girl with a Pearl Earring"],
        ),
        image_question(
            "Statue of Liberty",
            ["Christ the Redeemer", "The Thinker", "David"],
        ),
    ]
}

pub fn speed_questions() -> Vec<Question> {
    vec![
        text_question(
            "What is the capital of Australia?",
            "Canberra",
            ["Sydney", "Melbourne", "Perth"],
        ),
        text_question(
            "How many sides does a hexagon have?",
            "6",
            ["5", "7", "8"],
        ),
        text_question(
            "Which planet is known as the Red Planet?",
            "Mars",
            ["Venus", "Jupiter", "Mercury"],
        ),
        text_question(
            "What is the chemical symbol for gold?",
            "Au",
            ["Ag", "Gd", "Go"],
        ),
    ]
}

pub fn questions_for(variant: QuizVariant) -> Vec<Question> {
    match variant {
        QuizVariant::Image => image_questions(),
        QuizVariant::Speed => speed_questions(),
    }
}
