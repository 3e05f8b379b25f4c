//! Learner progress on the fundamentals page
//!
//! All of this is session state: it is built when the page is opened and
//! dropped when the learner navigates away.

use rustc_hash::{FxHashMap, FxHashSet};

/// Single-open disclosure state shared by accordions and the concept list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: Option<usize>,
}

impl Disclosure {
    pub fn new() -> Self {
        Disclosure { open: None }
    }

    /// Open `index`, or collapse it if it is already the open entry
    pub fn toggle(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        } else {
            self.open = Some(index);
        }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Completion, expansion and quiz state for an ordered list of concepts
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    concept_ids: Vec<String>,
    completed: FxHashSet<String>,
    expanded: Disclosure,
    /// concept index -> selected option index
    answers: FxHashMap<usize, usize>,
}

impl ProgressTracker {
    pub fn new<I, S>(concept_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProgressTracker {
            concept_ids: concept_ids.into_iter().map(Into::into).collect(),
            completed: FxHashSet::default(),
            expanded: Disclosure::new(),
            answers: FxHashMap::default(),
        }
    }

    pub fn total(&self) -> usize {
        self.concept_ids.len()
    }

    pub fn concept_ids(&self) -> &[String] {
        &self.concept_ids
    }

    /// Flip completion of `id`. Ids outside the concept list are ignored.
    /// Returns whether the concept is complete afterwards.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        if !self.concept_ids.iter().any(|c| c == id) {
            tracing::debug!(id, "ignoring completion toggle for unknown concept");
            return false;
        }
        if !self.completed.remove(id) {
            self.completed.insert(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn toggle_expanded(&mut self, index: usize) {
        self.expanded.toggle(index);
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded.open()
    }

    /// Percentage of concepts marked complete, unrounded
    pub fn progress(&self) -> f64 {
        if self.concept_ids.is_empty() {
            return 0.0;
        }
        100.0 * self.completed.len() as f64 / self.concept_ids.len() as f64
    }

    /// Record `option` as the answer to the quiz of concept `concept`,
    /// replacing any earlier choice
    pub fn select_answer(&mut self, concept: usize, option: usize) {
        if concept < self.concept_ids.len() {
            self.answers.insert(concept, option);
        }
    }

    pub fn answer(&self, concept: usize) -> Option<usize> {
        self.answers.get(&concept).copied()
    }

    /// `None` until the quiz has been answered
    pub fn is_correct(&self, concept: usize, correct_option: usize) -> Option<bool> {
        self.answer(concept).map(|a| a == correct_option)
    }

    /// Number of correct answers, given the correct option of each concept's
    /// quiz in concept order
    pub fn quiz_score<I>(&self, correct_options: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        correct_options
            .into_iter()
            .enumerate()
            .filter(|&(concept, correct)| self.is_correct(concept, correct) == Some(true))
            .count()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn reset(&mut self) {
        self.completed.clear();
        self.expanded.close();
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut tracker = ProgressTracker::new(["a", "b"]);
        assert!(!tracker.toggle_complete("zzz"));
        assert_eq!(tracker.completed_count(), 0);
    }

    #[test]
    fn test_empty_tracker_progress_is_zero() {
        let tracker = ProgressTracker::new(Vec::<String>::new());
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn test_answer_out_of_range_concept_ignored() {
        let mut tracker = ProgressTracker::new(["a"]);
        tracker.select_answer(3, 1);
        assert_eq!(tracker.answered_count(), 0);
    }
}
