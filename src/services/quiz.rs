//! Quiz Session
//!
//! A bounded sequence of questions sampled from the fixed bank, with score
//! tracking. Independent of the intent-routing loop once active: the engine
//! feeds raw answers straight in while the quiz mode holds.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::quiz::QuizQuestion;

/// Outcome of one accepted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the chosen option was correct
    pub correct: bool,
    /// One-based number of the correct option
    pub correct_option: usize,
    /// Explanation text for the question just answered
    pub explanation: String,
    /// Running score including this answer
    pub score_so_far: u32,
}

/// Result of submitting one line of input as an answer.
#[derive(Debug, Clone)]
pub enum AnswerResult {
    /// The answer was accepted and the question index advanced.
    Answered(AnswerOutcome),
    /// Non-numeric or out-of-range input; the question index is unchanged.
    Invalid {
        /// Number of options on the current question
        option_count: usize,
    },
}

/// One quiz run: sampled questions, cursor, and score.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: u32,
}

impl QuizSession {
    /// Sample `length` questions from the bank without replacement, order
    /// randomized by the injected rng.
    pub fn start(bank: &[QuizQuestion], length: usize, rng: &mut impl Rng) -> Self {
        let mut questions: Vec<QuizQuestion> = bank.to_vec();
        questions.shuffle(rng);
        questions.truncate(length.min(questions.len()));
        Self {
            questions,
            current_index: 0,
            score: 0,
        }
    }

    /// The question awaiting an answer, if any remain.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// One-based number of the current question, for display.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    /// Number of questions in this run.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Final (or running) score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Submit one line of input as an answer to the current question.
    ///
    /// Input must parse as an integer within `[1, option_count]`; anything
    /// else is rejected without advancing the cursor or changing the score.
    pub fn submit_answer(&mut self, input: &str) -> AnswerResult {
        let Some(question) = self.questions.get(self.current_index) else {
            return AnswerResult::Invalid { option_count: 0 };
        };
        let option_count = question.options.len();

        let choice: usize = match input.trim().parse() {
            Ok(n) => n,
            Err(_) => return AnswerResult::Invalid { option_count },
        };
        if choice < 1 || choice > option_count {
            return AnswerResult::Invalid { option_count };
        }

        let correct = choice - 1 == question.correct_index;
        if correct {
            self.score += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            correct_option: question.correct_index + 1,
            explanation: question.explanation.clone(),
            score_so_far: self.score,
        };
        self.current_index += 1;

        AnswerResult::Answered(outcome)
    }

    /// Qualitative summary for the final score. Thresholds scale with the
    /// session length so a 10-question run keeps the 8/5 cut-offs.
    pub fn tier_message(&self) -> &'static str {
        let len = self.questions.len().max(1);
        let score = self.score as usize;
        if score * 10 >= len * 8 {
            "Excellent! You're a cybersecurity expert!"
        } else if score * 10 >= len * 5 {
            "Great job! A solid understanding."
        } else {
            "A good start, but keep learning!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::question_bank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session_of(length: usize) -> QuizSession {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        QuizSession::start(&question_bank(), length, &mut rng)
    }

    #[test]
    fn test_start_samples_requested_length() {
        let session = session_of(10);
        assert_eq!(session.len(), 10);
        assert!(!session.is_complete());
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_sampling_has_no_duplicates() {
        let session = session_of(30);
        let mut texts: Vec<&str> = session.questions.iter().map(|q| q.text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 30);
    }

    #[test]
    fn test_all_correct_answers_reach_expert_tier() {
        let mut session = session_of(10);
        for _ in 0..10 {
            let answer = session.current_question().unwrap().correct_index + 1;
            match session.submit_answer(&answer.to_string()) {
                AnswerResult::Answered(outcome) => assert!(outcome.correct),
                AnswerResult::Invalid { .. } => panic!("valid answer rejected"),
            }
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), 10);
        assert_eq!(session.tier_message(), "Excellent! You're a cybersecurity expert!");
    }

    #[test]
    fn test_out_of_range_answer_does_not_advance() {
        let mut session = session_of(10);
        match session.submit_answer("99") {
            AnswerResult::Invalid { option_count } => assert!(option_count >= 2),
            AnswerResult::Answered(_) => panic!("out-of-range answer accepted"),
        }
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_non_numeric_answer_is_rejected() {
        let mut session = session_of(5);
        assert!(matches!(
            session.submit_answer("the first one"),
            AnswerResult::Invalid { .. }
        ));
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_wrong_answer_advances_without_scoring() {
        let mut session = session_of(10);
        let correct = session.current_question().unwrap().correct_index + 1;
        let option_count = session.current_question().unwrap().options.len();
        // Pick any valid but wrong option.
        let wrong = (1..=option_count).find(|&n| n != correct).unwrap();
        match session.submit_answer(&wrong.to_string()) {
            AnswerResult::Answered(outcome) => {
                assert!(!outcome.correct);
                assert_eq!(outcome.correct_option, correct);
            }
            AnswerResult::Invalid { .. } => panic!("valid answer rejected"),
        }
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_mid_tier_message() {
        let mut session = session_of(10);
        for i in 0..10 {
            let question = session.current_question().unwrap();
            let correct = question.correct_index + 1;
            let option_count = question.options.len();
            let answer = if i < 6 {
                correct
            } else {
                (1..=option_count).find(|&n| n != correct).unwrap()
            };
            session.submit_answer(&answer.to_string());
        }
        assert_eq!(session.score(), 6);
        assert_eq!(session.tier_message(), "Great job! A solid understanding.");
    }
}
