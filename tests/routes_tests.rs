// Integration tests for path resolution

use learn_lld::routes::{PatternId, Route, Topic, NOT_FOUND_ACTIONS, NOT_FOUND_SUGGESTIONS};

#[test]
fn test_exact_paths() {
    assert_eq!(Route::resolve("/"), Route::Home);
    assert_eq!(Route::resolve("/roadmap"), Route::Roadmap);
    assert_eq!(
        Route::resolve("/roadmap/oop-fundamentals"),
        Route::Topic(Topic::OopFundamentals)
    );
    assert_eq!(
        Route::resolve("/roadmap/solid-principles"),
        Route::Topic(Topic::SolidPrinciples)
    );
    assert_eq!(
        Route::resolve("/roadmap/design-patterns"),
        Route::Topic(Topic::DesignPatterns)
    );
    assert_eq!(Route::resolve("/patterns"), Route::Patterns);
    assert_eq!(
        Route::resolve("/patterns/factory-method"),
        Route::Pattern(PatternId::FactoryMethod)
    );
    assert_eq!(Route::resolve("/resources"), Route::Resources);
}

#[test]
fn test_unmatched_path_falls_back() {
    let route = Route::resolve("/does-not-exist");
    assert_eq!(route, Route::NotFound("/does-not-exist".to_string()));
    assert!(route.is_not_found());

    let paths: Vec<&str> = NOT_FOUND_SUGGESTIONS.iter().map(|l| l.path).collect();
    assert_eq!(
        paths,
        vec!["/patterns", "/roadmap/solid-principles", "/roadmap", "/resources"]
    );
    let suggested: Vec<&str> = NOT_FOUND_SUGGESTIONS.iter().map(|l| l.title).collect();
    assert_eq!(
        suggested,
        vec![
            "Design Patterns",
            "SOLID Principles",
            "Learning Roadmap",
            "Educational Resources"
        ]
    );
    let titles: Vec<&str> = NOT_FOUND_ACTIONS.iter().map(|l| l.title).collect();
    assert_eq!(titles, vec!["Return to Home", "Explore Patterns"]);
}

#[test]
fn test_unknown_pattern_and_topic_fall_back() {
    assert!(Route::resolve("/patterns/visitor").is_not_found());
    assert!(Route::resolve("/roadmap/testing").is_not_found());
    assert!(Route::resolve("/patterns/singleton/extra").is_not_found());
}

#[test]
fn test_trailing_slash_is_ignored() {
    assert_eq!(Route::resolve("/roadmap/"), Route::Roadmap);
    assert_eq!(
        Route::resolve("/patterns/observer/"),
        Route::Pattern(PatternId::Observer)
    );
}

#[test]
fn test_every_route_round_trips() {
    let routes = Route::all();
    assert_eq!(routes.len(), 1 + 1 + 3 + 1 + 9 + 1);
    for route in routes {
        assert_eq!(Route::resolve(&route.path()), route, "path {}", route);
    }
}

#[test]
fn test_pattern_slugs() {
    for id in PatternId::ALL {
        assert_eq!(PatternId::from_slug(id.slug()), Some(id));
    }
    assert_eq!(PatternId::Singleton.slug(), "singleton");
    assert_eq!(PatternId::FactoryMethod.slug(), "factory-method");
}
