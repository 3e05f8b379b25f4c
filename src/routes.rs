//! Static route table
//!
//! Every page of the course is reachable through a path. [`Route::resolve`] is
//! total: anything it does not recognise becomes [`Route::NotFound`], which
//! renders the fallback page with a fixed list of suggestions.

use std::fmt;

/// A titled link to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub title: &'static str,
    pub path: &'static str,
}

/// Header navigation
pub const NAV_LINKS: [Link; 4] = [
    Link { title: "Home", path: "/" },
    Link { title: "Roadmap", path: "/roadmap" },
    Link { title: "Design Patterns", path: "/patterns" },
    Link { title: "Resources", path: "/resources" },
];

/// Primary actions on the not-found page
pub const NOT_FOUND_ACTIONS: [Link; 2] = [
    Link { title: "Return to Home", path: "/" },
    Link { title: "Explore Patterns", path: "/patterns" },
];

/// "Popular destinations" on the not-found page
pub const NOT_FOUND_SUGGESTIONS: [Link; 4] = [
    Link { title: "Design Patterns", path: "/patterns" },
    Link { title: "SOLID Principles", path: "/roadmap/solid-principles" },
    Link { title: "Learning Roadmap", path: "/roadmap" },
    Link { title: "Educational Resources", path: "/resources" },
];

/// Patterns with a detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    Singleton,
    FactoryMethod,
    Builder,
    Adapter,
    Composite,
    Proxy,
    Observer,
    Strategy,
    Command,
}

impl PatternId {
    pub const ALL: [PatternId; 9] = [
        PatternId::Singleton,
        PatternId::FactoryMethod,
        PatternId::Builder,
        PatternId::Adapter,
        PatternId::Composite,
        PatternId::Proxy,
        PatternId::Observer,
        PatternId::Strategy,
        PatternId::Command,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PatternId::Singleton => "singleton",
            PatternId::FactoryMethod => "factory-method",
            PatternId::Builder => "builder",
            PatternId::Adapter => "adapter",
            PatternId::Composite => "composite",
            PatternId::Proxy => "proxy",
            PatternId::Observer => "observer",
            PatternId::Strategy => "strategy",
            PatternId::Command => "command",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Topic pages under `/roadmap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    OopFundamentals,
    SolidPrinciples,
    DesignPatterns,
}

impl Topic {
    pub const ALL: [Topic; 3] = [
        Topic::OopFundamentals,
        Topic::SolidPrinciples,
        Topic::DesignPatterns,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Topic::OopFundamentals => "oop-fundamentals",
            Topic::SolidPrinciples => "solid-principles",
            Topic::DesignPatterns => "design-patterns",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::OopFundamentals => "OOP Fundamentals",
            Topic::SolidPrinciples => "SOLID Principles",
            Topic::DesignPatterns => "Design Patterns",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// A page of the course
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Roadmap,
    Topic(Topic),
    Patterns,
    Pattern(PatternId),
    Resources,
    /// Unmatched path, kept verbatim for display
    NotFound(String),
}

impl Route {
    /// Map a path to its page. A single trailing slash is ignored and an
    /// empty path means `/`.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };

        let route = match normalized {
            "" | "/" => Some(Route::Home),
            "/roadmap" => Some(Route::Roadmap),
            "/patterns" => Some(Route::Patterns),
            "/resources" => Some(Route::Resources),
            other => {
                if let Some(slug) = other.strip_prefix("/roadmap/") {
                    Topic::from_slug(slug).map(Route::Topic)
                } else if let Some(slug) = other.strip_prefix("/patterns/") {
                    PatternId::from_slug(slug).map(Route::Pattern)
                } else {
                    None
                }
            }
        };

        route.unwrap_or_else(|| {
            tracing::warn!(path, "404: attempted to access non-existent route");
            Route::NotFound(path.to_string())
        })
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Roadmap => "/roadmap".to_string(),
            Route::Topic(topic) => format!("/roadmap/{}", topic.slug()),
            Route::Patterns => "/patterns".to_string(),
            Route::Pattern(id) => format!("/patterns/{}", id.slug()),
            Route::Resources => "/resources".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }

    /// Every matched route, in navigation order
    pub fn all() -> Vec<Route> {
        let mut routes = vec![Route::Home, Route::Roadmap];
        routes.extend(Topic::ALL.into_iter().map(Route::Topic));
        routes.push(Route::Patterns);
        routes.extend(PatternId::ALL.into_iter().map(Route::Pattern));
        routes.push(Route::Resources);
        routes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
