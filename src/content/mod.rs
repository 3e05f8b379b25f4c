//! Course content catalog
//!
//! Everything here is static data: pattern write-ups, the fundamentals
//! curriculum, SOLID principles, roadmap levels, resources and FAQ entries.
//! Pages borrow from these tables; nothing in the catalog is mutated at runtime.
//!
//! - [`patterns`]: the nine design patterns with detail-page content
//! - [`curriculum`]: fundamentals concepts and quizzes, SOLID principles, roadmap
//! - [`site`]: home page sections, FAQ, resources, footer

pub mod curriculum;
pub mod patterns;
pub mod site;

use crate::routes::PatternId;

/// Difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }

    /// Card footer text, e.g. "Creational Pattern"
    pub fn card_label(self) -> String {
        format!("{} Pattern", self.label())
    }

    /// Section heading on the index page, e.g. "Creational Patterns"
    pub fn heading(self) -> String {
        format!("{} Patterns", self.label())
    }
}

/// A snippet shown in a code runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub title: &'static str,
    /// Runner language id (lower case, e.g. `typescript`)
    pub language: &'static str,
    pub code: &'static str,
}

/// A titled real-world example on a pattern page
#[derive(Debug, Clone, Copy)]
pub struct PatternExample {
    pub title: &'static str,
    pub description: &'static str,
    pub sample: CodeSample,
}

/// Everything rendered on a pattern card and its detail page
#[derive(Debug, Clone, Copy)]
pub struct PatternInfo {
    pub id: PatternId,
    pub name: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub level: Level,
    pub intent: &'static str,
    pub problem: &'static [&'static str],
    pub when_to_use: &'static [&'static str],
    pub implementation: CodeSample,
    pub examples: &'static [PatternExample],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// Multiple-choice question attached to a concept
#[derive(Debug, Clone, Copy)]
pub struct Quiz {
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`
    pub correct: usize,
    pub explanation: &'static str,
}

/// A teachable unit of the fundamentals curriculum
#[derive(Debug, Clone, Copy)]
pub struct Concept {
    /// Stable id used by the progress tracker
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
    pub example: CodeSample,
    pub quiz: Quiz,
}

/// One of the SOLID principles
#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub acronym: char,
    pub title: &'static str,
    pub description: &'static str,
    pub violation: CodeSample,
    pub fix: CodeSample,
}

/// Search and filter state of the patterns index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternFilter {
    pub search: String,
    /// `None` means "All Categories"
    pub category: Option<Category>,
    /// `None` means "All Levels"
    pub level: Option<Level>,
}

impl PatternFilter {
    /// Case-insensitive substring match on name and summary, intersected with
    /// the category and level filters
    pub fn matches(&self, pattern: &PatternInfo) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_match = needle.is_empty()
            || pattern.name.to_lowercase().contains(&needle)
            || pattern.summary.to_lowercase().contains(&needle);

        text_match
            && self.category.map_or(true, |c| c == pattern.category)
            && self.level.map_or(true, |l| l == pattern.level)
    }

    pub fn apply<'a>(&self, patterns: &'a [PatternInfo]) -> Vec<&'a PatternInfo> {
        patterns.iter().filter(|p| self.matches(p)).collect()
    }

    /// All Categories -> Creational -> Structural -> Behavioral -> All Categories
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::Creational),
            Some(Category::Creational) => Some(Category::Structural),
            Some(Category::Structural) => Some(Category::Behavioral),
            Some(Category::Behavioral) => None,
        };
    }

    /// All Levels -> Beginner -> Intermediate -> Advanced -> All Levels
    pub fn cycle_level(&mut self) {
        self.level = match self.level {
            None => Some(Level::Beginner),
            Some(Level::Beginner) => Some(Level::Intermediate),
            Some(Level::Intermediate) => Some(Level::Advanced),
            Some(Level::Advanced) => None,
        };
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map_or("All Categories", Category::label)
    }

    pub fn level_label(&self) -> &'static str {
        self.level.map_or("All Levels", Level::label)
    }
}
