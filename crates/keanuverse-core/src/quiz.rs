//! Trivia quiz challenge
//!
//! Linear multiple-choice quiz: answer each question to advance, score at
//! the end, pass at 2/3. Failing is not an error - the results screen
//! offers a retry that resets progress.

use serde::{Deserialize, Serialize};

/// Minimum correct answers to pass the challenge
pub const PASS_THRESHOLD: usize = 2;

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: [String; 4],
    /// Index into `options`
    pub correct: usize,
}

impl QuizQuestion {
    pub fn new(prompt: &str, options: [&str; 4], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(String::from),
            correct,
        }
    }
}

/// The fixed trivia set for the GVIPC quiz challenge
pub fn trivia_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "In which year was 'The Matrix' released?",
            ["1997", "1998", "1999", "2000"],
            2,
        ),
        QuizQuestion::new(
            "What is the name of Keanu's character in 'John Wick'?",
            ["John Wick", "John Smith", "Jonathan Wick", "Jardani Jovonovich"],
            0,
        ),
        QuizQuestion::new(
            "Which of these bands did Keanu Reeves play bass for?",
            ["Nirvana", "Dogstar", "Pearl Jam", "Foo Fighters"],
            1,
        ),
    ]
}

/// Scored quiz result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl QuizOutcome {
    /// Pass at `PASS_THRESHOLD` or better
    pub fn passed(&self) -> bool {
        self.score >= PASS_THRESHOLD
    }
}

/// Quiz session state machine
///
/// `select` records an answer for the current question, `advance` moves to
/// the next question or scores the whole set on the last one. `retry`
/// returns a scored (failed) quiz to its initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<Option<usize>>,
    outcome: Option<QuizOutcome>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current: 0,
            answers,
            outcome: None,
        }
    }

    /// Zero-based index of the question being shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Answer recorded for the current question, if any
    pub fn selected(&self) -> Option<usize> {
        self.answers[self.current]
    }

    /// True once every shown question has been answered through `current`
    pub fn can_advance(&self) -> bool {
        self.selected().is_some()
    }

    /// True when `current` is the last question
    pub fn on_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Record an answer for the current question (re-selection overwrites)
    pub fn select(&mut self, answer: usize) {
        if answer < self.current_question().options.len() {
            self.answers[self.current] = Some(answer);
        }
    }

    /// Advance to the next question, or score the quiz on the last one.
    ///
    /// Returns the outcome once scored; `None` while questions remain.
    /// Does nothing without an answer for the current question.
    pub fn advance(&mut self) -> Option<QuizOutcome> {
        if !self.can_advance() || self.outcome.is_some() {
            return self.outcome;
        }
        if self.on_last_question() {
            let score = self
                .questions
                .iter()
                .zip(&self.answers)
                .filter(|(q, a)| **a == Some(q.correct))
                .count();
            self.outcome = Some(QuizOutcome {
                score,
                total: self.questions.len(),
            });
        } else {
            self.current += 1;
        }
        self.outcome
    }

    /// Scored result, once `advance` has been called on the last question
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.outcome
    }

    /// Reset index, answers, and results for another attempt
    pub fn retry(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.questions.len()];
        self.outcome = None;
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(trivia_questions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(answers: &[usize]) -> Quiz {
        let mut quiz = Quiz::default();
        for &a in answers {
            quiz.select(a);
            quiz.advance();
        }
        quiz
    }

    #[test]
    fn test_answer_key_scores_full_marks() {
        let quiz = run(&[2, 0, 1]);
        let outcome = quiz.outcome().expect("scored");
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.total, 3);
        assert!(outcome.passed());
    }

    #[test]
    fn test_low_score_forces_retry_path() {
        // Answering 0 across the board only hits the John Wick question
        let quiz = run(&[0, 0, 0]);
        let outcome = quiz.outcome().expect("scored");
        assert_eq!(outcome.score, 1);
        assert!(outcome.score < PASS_THRESHOLD);
        assert!(!outcome.passed());
    }

    #[test]
    fn test_two_of_three_passes() {
        let quiz = run(&[2, 0, 0]);
        assert!(quiz.outcome().expect("scored").passed());
    }

    #[test]
    fn test_cannot_advance_unanswered() {
        let mut quiz = Quiz::default();
        assert!(!quiz.can_advance());
        assert_eq!(quiz.advance(), None);
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_reselection_overwrites() {
        let mut quiz = Quiz::default();
        quiz.select(0);
        quiz.select(2);
        assert_eq!(quiz.selected(), Some(2));
    }

    #[test]
    fn test_out_of_range_answer_ignored() {
        let mut quiz = Quiz::default();
        quiz.select(9);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_retry_resets_everything() {
        let mut quiz = run(&[0, 1, 0]);
        quiz.retry();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.outcome(), None);
    }

    #[test]
    fn test_advance_after_scoring_is_stable() {
        let mut quiz = run(&[2, 0, 1]);
        let first = quiz.outcome();
        quiz.select(3);
        assert_eq!(quiz.advance(), first);
    }
}
