//! Multiple-choice quiz session.
//!
//! A [`Quiz`] walks through its questions once: each answer advances the
//! cursor, correct answers add to the score, and answering the last question
//! finishes the run. [`Quiz::reset`] starts over with the same questions.

use crate::clients::trivia::{RawQuestion, TriviaClient};
use crate::markup::decode_entities;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const NO_QUESTIONS_MESSAGE: &str = "No questions available. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Decodes the text and shuffles the correct answer in among the others.
    pub fn from_raw<R: Rng + ?Sized>(raw: &RawQuestion, rng: &mut R) -> Self {
        let mut answers: Vec<Answer> = raw
            .incorrect_answers
            .iter()
            .map(|a| Answer {
                text: decode_entities(a),
                is_correct: false,
            })
            .collect();
        answers.push(Answer {
            text: decode_entities(&raw.correct_answer),
            is_correct: true,
        });
        answers.shuffle(rng);

        Self {
            text: decode_entities(&raw.question),
            answers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    finished: bool,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    pub fn from_raw<R: Rng + ?Sized>(raw: &[RawQuestion], rng: &mut R) -> Self {
        Self::new(raw.iter().map(|q| Question::from_raw(q, rng)).collect())
    }

    /// Fetches a batch. Any failure yields an empty quiz.
    pub async fn fetch(client: &TriviaClient, amount: u32) -> Self {
        match client.fetch_questions(amount).await {
            Ok(raw) => Self::from_raw(&raw, &mut rand::thread_rng()),
            Err(e) => {
                log::error!("Failed to fetch questions: {}", e);
                Self::default()
            }
        }
    }

    /// Records an answer to the current question.
    ///
    /// Returns whether it was correct, or None if the quiz is finished or the
    /// choice is out of range.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        if self.finished {
            return None;
        }
        let correct = self.current_question()?.answers.get(choice)?.is_correct;
        if correct {
            self.score += 1;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
        Some(correct)
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.finished = false;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn result_line(&self) -> String {
        format!("You scored {} out of {}", self.score, self.questions.len())
    }
}
