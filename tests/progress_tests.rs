// Integration tests for concept progress, quizzes and accordions

use learn_lld::content::curriculum::{quiz_answers, CONCEPTS};
use learn_lld::progress::{Disclosure, ProgressTracker};

fn course_tracker() -> ProgressTracker {
    ProgressTracker::new(CONCEPTS.iter().map(|c| c.id))
}

#[test]
fn test_toggle_complete_is_involution() {
    let mut tracker = course_tracker();
    assert!(tracker.toggle_complete("encapsulation"));
    assert!(tracker.is_complete("encapsulation"));
    assert!(!tracker.toggle_complete("encapsulation"));
    assert!(!tracker.is_complete("encapsulation"));
    assert_eq!(tracker.completed_count(), 0);
}

#[test]
fn test_two_of_five_is_forty_percent() {
    let mut tracker = course_tracker();
    assert_eq!(tracker.total(), 5);
    tracker.toggle_complete("classes-objects");
    tracker.toggle_complete("polymorphism");
    assert_eq!(tracker.progress(), 40.0);
}

#[test]
fn test_all_complete_is_hundred_percent() {
    let mut tracker = course_tracker();
    for concept in CONCEPTS.iter() {
        tracker.toggle_complete(concept.id);
    }
    assert_eq!(tracker.progress(), 100.0);
}

#[test]
fn test_progress_is_not_rounded() {
    let mut tracker = ProgressTracker::new(["a", "b", "c"]);
    tracker.toggle_complete("a");
    assert!((tracker.progress() - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_expanded_is_single_open() {
    let mut tracker = course_tracker();
    tracker.toggle_expanded(1);
    assert_eq!(tracker.expanded(), Some(1));
    tracker.toggle_expanded(1);
    assert_eq!(tracker.expanded(), None);
    tracker.toggle_expanded(1);
    tracker.toggle_expanded(3);
    assert_eq!(tracker.expanded(), Some(3));
}

#[test]
fn test_disclosure_toggle() {
    let mut faq = Disclosure::new();
    faq.toggle(2);
    assert!(faq.is_open(2));
    faq.toggle(4);
    assert!(!faq.is_open(2));
    assert_eq!(faq.open(), Some(4));
    faq.close();
    assert_eq!(faq.open(), None);
}

#[test]
fn test_quiz_score_counts_correct_answers() {
    let mut tracker = course_tracker();
    let answers: Vec<usize> = quiz_answers().collect();
    assert_eq!(answers.len(), CONCEPTS.len());

    tracker.select_answer(0, answers[0]);
    tracker.select_answer(1, answers[1] + 1);
    tracker.select_answer(2, answers[2]);
    assert_eq!(tracker.answered_count(), 3);
    assert_eq!(tracker.is_correct(1, answers[1]), Some(false));
    assert_eq!(tracker.is_correct(3, answers[3]), None);
    assert_eq!(tracker.quiz_score(quiz_answers()), 2);

    // Changing an answer replaces it
    tracker.select_answer(1, answers[1]);
    assert_eq!(tracker.quiz_score(quiz_answers()), 3);
}

#[test]
fn test_reset_clears_everything() {
    let mut tracker = course_tracker();
    tracker.toggle_complete("abstraction");
    tracker.toggle_expanded(0);
    tracker.select_answer(0, 1);
    tracker.reset();
    assert_eq!(tracker.completed_count(), 0);
    assert_eq!(tracker.expanded(), None);
    assert_eq!(tracker.answered_count(), 0);
    assert_eq!(tracker.progress(), 0.0);
}
