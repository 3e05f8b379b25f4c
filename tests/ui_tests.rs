// Integration tests driving the application through key events and a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use learn_lld::config::AppConfig;
use learn_lld::context::SiteContext;
use learn_lld::routes::{PatternId, Route, Topic};
use learn_lld::runner::RunStatus;
use learn_lld::ui::pages::home::HomeEntry;
use learn_lld::ui::pages::Page;
use learn_lld::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::time::Instant;

fn app_at(route: &str) -> App {
    let config = AppConfig {
        start_route: route.to_string(),
        run_delay_ms: 0,
        ..AppConfig::default()
    };
    App::new(SiteContext::new(config))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw one frame and return the screen contents as text
fn render(app: &mut App) -> String {
    render_sized(app, 120, 40)
}

fn render_sized(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_unknown_start_route_shows_not_found() {
    let mut app = app_at("/does-not-exist");
    assert!(app.route().is_not_found());
    let screen = render(&mut app);
    assert!(screen.contains("404"));
    assert!(screen.contains("Page not found"));
    assert!(screen.contains("Return to Home"));
    assert!(screen.contains("Educational Resources"));
}

#[test]
fn test_not_found_links_navigate() {
    let mut app = app_at("/nowhere");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), &Route::Home);
}

#[test]
fn test_every_route_renders() {
    for route in Route::all() {
        let mut app = app_at(&route.path());
        assert_eq!(app.route(), &route);
        let screen = render(&mut app);
        assert!(screen.contains("Learn Low-Level Design"), "header missing on {}", route);
    }
}

#[test]
fn test_menu_navigation_and_back() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('m'));
    assert!(app.header().menu_open);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.route(), &Route::Patterns);
    assert!(!app.header().menu_open);
    assert_eq!(app.history(), ["/".to_string()]);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), &Route::Home);
    assert!(app.history().is_empty());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.status_message(), "Nothing to go back to");
}

#[test]
fn test_header_search_prefills_patterns_filter() {
    let mut app = app_at("/roadmap");
    press(&mut app, KeyCode::Char('/'));
    assert!(app.header().search_open);
    type_text(&mut app, "obs");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), &Route::Patterns);
    assert!(!app.header().search_open);
    match app.page() {
        Page::Patterns(page) => {
            assert_eq!(page.filter().search, "obs");
            assert_eq!(page.visible().len(), 1);
        }
        _ => panic!("expected the patterns page"),
    }
}

#[test]
fn test_patterns_filters_cycle() {
    let mut app = app_at("/patterns");
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('l'));
    match app.page() {
        Page::Patterns(page) => {
            assert_eq!(page.filter().category_label(), "Creational");
            assert_eq!(page.filter().level_label(), "Beginner");
            assert!(page
                .visible()
                .iter()
                .all(|p| p.category.label() == "Creational" && p.level.label() == "Beginner"));
        }
        _ => panic!("expected the patterns page"),
    }
    let screen = render(&mut app);
    assert!(screen.contains("Creational"));
}

#[test]
fn test_home_start_learning() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), &Route::Topic(Topic::OopFundamentals));
}

#[test]
fn test_fundamentals_completion_updates_progress() {
    let mut app = app_at("/roadmap/oop-fundamentals");
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('c'));
    match app.page() {
        Page::Fundamentals(page) => assert_eq!(page.tracker().progress(), 40.0),
        _ => panic!("expected the fundamentals page"),
    }
    let screen = render(&mut app);
    assert!(screen.contains("40% complete"));
}

#[test]
fn test_fundamentals_run_completes_on_tick() {
    let mut app = app_at("/roadmap/oop-fundamentals");
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.status_message(), "Running code...");
    app.tick(Instant::now());
    match app.page() {
        Page::Fundamentals(page) => {
            let runner = page.runner(0).expect("runner");
            assert_eq!(runner.status(), RunStatus::Completed);
            assert!(runner.output().is_some_and(|o| o.contains("[LOG]")));
        }
        _ => panic!("expected the fundamentals page"),
    }
}

#[test]
fn test_editing_captures_keys() {
    let mut app = app_at("/roadmap/oop-fundamentals");
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "q");
    assert!(!app.should_quit());
    match app.page() {
        Page::Fundamentals(page) => {
            assert!(page.is_editing());
            assert!(page.runner(0).is_some_and(|r| r.source().ends_with('q')));
        }
        _ => panic!("expected the fundamentals page"),
    }
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.status_message(), "Finished editing");
}

#[test]
fn test_pattern_tabs_and_runner() {
    let mut app = app_at("/patterns/singleton");
    assert_eq!(app.route(), &Route::Pattern(PatternId::Singleton));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.status_message(), "No runnable code on this tab");

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.status_message(), "Running code...");
    app.tick(Instant::now());
    match app.page() {
        Page::Pattern(page) => {
            assert_eq!(page.active_tab(), 1);
            let runner = page.active_runner().expect("runner");
            assert_eq!(runner.status(), RunStatus::Completed);
        }
        _ => panic!("expected a pattern page"),
    }
    let screen = render(&mut app);
    assert!(screen.contains("Output"));
}

#[test]
fn test_solid_examples_are_read_only() {
    let mut app = app_at("/roadmap/solid-principles");
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.status_message(), "This example is read-only");
    match app.page() {
        Page::Solid(page) => {
            assert!(page.current_runner().is_some_and(|r| r.is_read_only()));
        }
        _ => panic!("expected the SOLID page"),
    }
}

#[test]
fn test_quit_keys() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_at("/");
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_typed_text_stays_visible_in_long_example() {
    let mut app = app_at("/roadmap/oop-fundamentals");
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "ZQZQZ");

    let screen = render_sized(&mut app, 100, 30);
    assert!(screen.contains("ZQZQZ"));
    match app.page() {
        Page::Fundamentals(page) => {
            assert_eq!(page.selected(), 3);
            assert!(page.runner_scroll() > 0);
        }
        _ => panic!("expected the fundamentals page"),
    }
}

#[test]
fn test_runner_scroll_keys() {
    let mut app = app_at("/roadmap/oop-fundamentals");
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    let screen = render_sized(&mut app, 100, 30);
    assert!(!screen.contains("printArea(new Rectangle"));

    for _ in 0..20 {
        press(&mut app, KeyCode::Char('J'));
    }
    let screen = render_sized(&mut app, 100, 30);
    assert!(screen.contains("printArea(new Rectangle"));

    press(&mut app, KeyCode::Char('K'));
    match app.page() {
        Page::Fundamentals(page) => assert!(page.runner_scroll() > 0),
        _ => panic!("expected the fundamentals page"),
    }

    // A new concept starts at the top of its example
    press(&mut app, KeyCode::Up);
    match app.page() {
        Page::Fundamentals(page) => assert_eq!(page.runner_scroll(), 0),
        _ => panic!("expected the fundamentals page"),
    }
}

#[test]
fn test_pattern_implementation_scrolls_with_arrows() {
    let mut app = app_at("/patterns/singleton");
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    match app.page() {
        Page::Pattern(page) => assert_eq!(page.runner_scroll(), 2),
        _ => panic!("expected a pattern page"),
    }
    press(&mut app, KeyCode::Char('3'));
    match app.page() {
        Page::Pattern(page) => assert_eq!(page.runner_scroll(), 0),
        _ => panic!("expected a pattern page"),
    }
}

#[test]
fn test_last_home_entry_visible_in_narrow_terminal() {
    let mut app = app_at("/");
    for _ in 0..40 {
        press(&mut app, KeyCode::Down);
    }
    match app.page() {
        Page::Home(page) => assert!(matches!(
            page.selected_entry(),
            Some(HomeEntry::Link { ref label, .. }) if label == "Get Started"
        )),
        _ => panic!("expected the home page"),
    }
    let screen = render_sized(&mut app, 60, 24);
    assert!(screen.contains("▶ Get Started"));
}

#[test]
fn test_home_marks_exactly_one_entry() {
    let mut app = app_at("/");
    let count = match app.page() {
        Page::Home(page) => page.entries().len(),
        _ => panic!("expected the home page"),
    };
    for _ in 0..count {
        let screen = render(&mut app);
        assert_eq!(screen.matches('▶').count(), 1);
        press(&mut app, KeyCode::Down);
    }
}

#[test]
fn test_home_shows_testimonials_before_faq() {
    let mut app = app_at("/");
    for _ in 0..40 {
        let on_faq = match app.page() {
            Page::Home(page) => page.selected_entry() == Some(HomeEntry::Faq(0)),
            _ => panic!("expected the home page"),
        };
        if on_faq {
            break;
        }
        press(&mut app, KeyCode::Down);
    }
    let screen = render(&mut app);
    assert!(screen.contains("Michael Rodriguez"));
    assert!(screen.contains("Frequently Asked Questions"));
    let testimonial = screen.find("Michael Rodriguez").unwrap_or(usize::MAX);
    let faq = screen.find("Frequently Asked Questions").unwrap_or(0);
    assert!(testimonial < faq);
}
