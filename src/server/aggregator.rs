//! Running totals across every scored submission.
//!
//! Both counters live behind one mutex and are always read and written
//! together, so no caller can observe a half-applied submission.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::Percentage;

/// Process-wide totals. Starts at zero and only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateState {
    pub quizzes_taken: u64,
    pub total_correct: u64,
}

impl AggregateState {
    /// Share of all recorded answers that were correct, as a percentage.
    pub fn comparison(&self, question_count: usize) -> Percentage {
        let possible = self.quizzes_taken.saturating_mul(question_count as u64);
        if possible == 0 {
            return Percentage::default();
        }
        Percentage::from_ratio(self.total_correct as f64 / possible as f64)
    }
}

/// Shared scoring aggregate.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: Mutex<AggregateState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one submission and return the totals as they stood right after it.
    pub fn record(&self, correct_count: usize, question_count: usize) -> AggregateState {
        // Clamped so total_correct never exceeds quizzes_taken * question_count.
        let correct_count = correct_count.min(question_count) as u64;

        let mut state = self.lock();
        state.quizzes_taken += 1;
        state.total_correct += correct_count;
        *state
    }

    /// Count one submission and compare against every submission so far,
    /// this one included.
    ///
    /// The increment and the percentage come from the same critical section.
    pub fn record_and_compare(&self, correct_count: usize, question_count: usize) -> Percentage {
        self.record(correct_count, question_count)
            .comparison(question_count)
    }

    /// Consistent copy of the current totals.
    pub fn snapshot(&self) -> AggregateState {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, AggregateState> {
        // Updates are two additions; a panicking holder cannot leave them torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_first_submission() {
        let aggregator = Aggregator::new();
        assert_eq!(aggregator.record_and_compare(3, 5).to_string(), "60.00");
        assert_eq!(
            aggregator.snapshot(),
            AggregateState { quizzes_taken: 1, total_correct: 3 }
        );
    }

    #[test]
    fn test_sequential_submissions() {
        let aggregator = Aggregator::new();
        assert_eq!(aggregator.record_and_compare(5, 5).to_string(), "100.00");
        assert_eq!(aggregator.record_and_compare(0, 5).to_string(), "50.00");
        assert_eq!(
            aggregator.snapshot(),
            AggregateState { quizzes_taken: 2, total_correct: 5 }
        );
    }

    #[test]
    fn test_rounding() {
        let aggregator = Aggregator::new();
        aggregator.record(1, 3);
        assert_eq!(aggregator.record_and_compare(1, 3).to_string(), "33.33");
    }

    #[test]
    fn test_exact_tie_is_rounded_once() {
        let aggregator = Aggregator::new();
        aggregator.record(1, 5);
        for _ in 1..31 {
            aggregator.record(0, 5);
        }
        // 1 correct out of 32 * 5 answers is exactly 0.625%.
        assert_eq!(aggregator.record_and_compare(0, 5).to_string(), "0.62");

        for _ in 32..159 {
            aggregator.record(0, 5);
        }
        assert_eq!(aggregator.record_and_compare(0, 5).to_string(), "0.12");
        assert_eq!(aggregator.snapshot().quizzes_taken, 160);
    }

    #[test]
    fn test_correct_count_is_clamped() {
        let aggregator = Aggregator::new();
        let state = aggregator.record(9, 5);
        assert_eq!(state.total_correct, 5);
        assert_eq!(state.comparison(5).to_string(), "100.00");
    }

    #[test]
    fn test_zero_questions_does_not_divide_by_zero() {
        let aggregator = Aggregator::new();
        assert_eq!(aggregator.record_and_compare(0, 0).to_string(), "0.00");
        assert_eq!(Aggregator::new().snapshot().comparison(5).to_string(), "0.00");
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 500;
        const QUESTIONS: usize = 5;

        let aggregator = Arc::new(Aggregator::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let aggregator = Arc::clone(&aggregator);
                thread::spawn(move || {
                    let mut observed = Vec::with_capacity(PER_THREAD);
                    for i in 0..PER_THREAD {
                        let correct = (t + i) % (QUESTIONS + 1);
                        observed.push(aggregator.record(correct, QUESTIONS));
                    }
                    observed
                })
            })
            .collect();

        let mut observed = Vec::new();
        for handle in handles {
            observed.extend(handle.join().unwrap());
        }

        let expected_correct: u64 = (0..THREADS)
            .flat_map(|t| (0..PER_THREAD).map(move |i| ((t + i) % (QUESTIONS + 1)) as u64))
            .sum();
        let final_state = aggregator.snapshot();
        assert_eq!(final_state.quizzes_taken, (THREADS * PER_THREAD) as u64);
        assert_eq!(final_state.total_correct, expected_correct);

        // Each call sees a distinct prefix of the serialized history.
        observed.sort_by_key(|s| s.quizzes_taken);
        for (n, state) in observed.iter().enumerate() {
            assert_eq!(state.quizzes_taken, n as u64 + 1);
            assert!(state.total_correct <= state.quizzes_taken * QUESTIONS as u64);
        }
        for pair in observed.windows(2) {
            assert!(pair[0].total_correct <= pair[1].total_correct);
        }
    }

    #[test]
    fn test_concurrent_perfect_scores_always_compare_at_100() {
        let aggregator = Arc::new(Aggregator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let aggregator = Arc::clone(&aggregator);
                thread::spawn(move || {
                    (0..200)
                        .map(|_| aggregator.record_and_compare(5, 5))
                        .all(|p| p.to_string() == "100.00")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(aggregator.snapshot().total_correct, 8 * 200 * 5);
    }
}
