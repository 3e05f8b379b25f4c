//! Home page sections, FAQ, resources and footer links

use crate::routes::{Link, Topic};

pub const SITE_NAME: &str = "Learn Low-Level Design";
pub const SITE_BADGE: &str = "LLD";
pub const TAGLINE: &str = "Master software architecture one pattern at a time.";

pub const HERO_EYEBROW: &str = "Master Software Architecture";
pub const HERO_TITLE: &str = "Learn Low-Level Design Skills";
pub const HERO_SUBTITLE: &str = "A comprehensive guide to understanding and implementing effective Low-Level Design principles and patterns";

/// Headline numbers under the hero
pub const HERO_STATS: [(&str, &str); 3] = [
    ("10+", "Core Concepts"),
    ("25+", "Design Patterns"),
    ("50+", "Code Examples"),
];

pub const INTRO: &str = "Low-Level Design (LLD) focuses on the detailed implementation of system components, including classes, interfaces, and their relationships, bringing the architectural vision to life.";

pub const WHY_LLD: [&str; 5] = [
    "Build maintainable and scalable software systems",
    "Improve code quality and reduce technical debt",
    "Enhance collaboration through clear component interfaces",
    "Make your systems adaptable to changing requirements",
    "Ace technical interviews with solid LLD knowledge",
];

pub const LEARNING_PATH: [&str; 5] = [
    "Master object-oriented fundamentals",
    "Learn SOLID principles for robust design",
    "Understand common design patterns and when to apply them",
    "Practice with real-world case studies and examples",
    "Apply knowledge to system design interviews",
];

/// Card on the home page roadmap preview
#[derive(Debug, Clone, Copy)]
pub struct PreviewStep {
    pub topic: Topic,
    pub description: &'static str,
}

pub const ROADMAP_PREVIEW: [PreviewStep; 3] = [
    PreviewStep {
        topic: Topic::OopFundamentals,
        description: "Master object-oriented principles that form the foundation of effective LLD",
    },
    PreviewStep {
        topic: Topic::SolidPrinciples,
        description: "Understand the cornerstone principles for maintainable software design",
    },
    PreviewStep {
        topic: Topic::DesignPatterns,
        description: "Implement proven solutions to common design challenges in software",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqItem; 6] = [
    FaqItem {
        question: "What is Low-Level Design?",
        answer: "Low-Level Design (LLD) is a component-level design process that focuses on the detailed implementation aspects of a system. It includes defining classes, interfaces, their relationships, methods, and the implementation details of algorithms that were outlined during the high-level design phase.",
    },
    FaqItem {
        question: "How is LLD different from High-Level Design?",
        answer: "High-Level Design (HLD) focuses on the overall architecture and structure of a system, dealing with component placement, database design, and service identification. LLD zooms into the actual implementation details of each component, with class diagrams, sequence diagrams, and specific algorithms.",
    },
    FaqItem {
        question: "Do I need to know UML for Low-Level Design?",
        answer: "A deep understanding of UML isn't mandatory, but a basic knowledge of class, sequence, and activity diagrams is valuable for LLD. These diagrams help communicate designs; the focus should be on the underlying principles rather than notation.",
    },
    FaqItem {
        question: "How important are design patterns for LLD?",
        answer: "Design patterns provide tested, proven development paradigms. They offer standardized solutions to common problems, promote reuse, and make systems more maintainable. Knowing when and how to apply them is a key LLD skill.",
    },
    FaqItem {
        question: "Can I apply LLD principles to my current projects?",
        answer: "Absolutely. For existing projects you can gradually refactor code toward SOLID principles and appropriate patterns. New features can be built with proper LLD from the start, improving quality incrementally.",
    },
    FaqItem {
        question: "How does LLD help in technical interviews?",
        answer: "Many interviews, especially for senior roles, include LLD problems where candidates design classes and their interactions for a scenario. Strong LLD skills demonstrate that you can create maintainable, extensible solutions.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Initials shown in place of a photo
    pub initials: &'static str,
    pub stars: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS_TITLE: &str = "What Developers Are Saying";
pub const TESTIMONIALS_SUBTITLE: &str =
    "Join thousands of developers who have transformed their coding practices";

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alex Johnson",
        role: "Senior Software Engineer",
        company: "TechCorp",
        initials: "AJ",
        stars: 5,
        text: "LearnLLD helped me understand complex design patterns that I was struggling with for months. The visual explanations and practical examples made all the difference!",
    },
    Testimonial {
        name: "Samantha Chen",
        role: "Lead Developer",
        company: "InnovateSoft",
        initials: "SC",
        stars: 5,
        text: "I credit my recent promotion to the knowledge I gained from this platform. The roadmap approach guided me through exactly what I needed to learn in the right order.",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Software Architect",
        company: "DesignWorks",
        initials: "MR",
        stars: 5,
        text: "After years of working with code, I finally understand the 'why' behind design decisions. This resource has been invaluable for deepening my software architecture knowledge.",
    },
];

pub const CTA_TITLE: &str = "Ready to Master Low-Level Design?";
pub const CTA_TEXT: &str = "Start with the fundamentals and work your way up to advanced design patterns.";

#[derive(Debug, Clone, Copy)]
pub struct ResourceItem {
    pub name: &'static str,
    /// `None` for entries without a public link
    pub url: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceCategory {
    pub title: &'static str,
    pub items: &'static [ResourceItem],
}

pub const RESOURCES_INTRO: &str = "This curated collection of resources will help you deepen your understanding of Low-Level Design concepts. From books and online courses to websites and tools, these resources cover different aspects of LLD.";

pub static RESOURCES: [ResourceCategory; 4] = [
    ResourceCategory {
        title: "Books",
        items: &[
            ResourceItem {
                name: "Clean Code by Robert C. Martin",
                url: None,
                description: "A handbook of agile software craftsmanship",
            },
            ResourceItem {
                name: "Design Patterns: Elements of Reusable Object-Oriented Software",
                url: None,
                description: "The classic 'Gang of Four' book on design patterns",
            },
            ResourceItem {
                name: "Head First Design Patterns",
                url: None,
                description: "A brain-friendly guide to design patterns",
            },
        ],
    },
    ResourceCategory {
        title: "Online Courses",
        items: &[
            ResourceItem {
                name: "Design Patterns in Object Oriented Programming",
                url: None,
                description: "Comprehensive video course on design patterns",
            },
            ResourceItem {
                name: "Software Architecture & Design",
                url: None,
                description: "Learn about software architecture principles",
            },
            ResourceItem {
                name: "Clean Code: Writing Code for Humans",
                url: None,
                description: "Learn how to write clean, maintainable code",
            },
        ],
    },
    ResourceCategory {
        title: "Websites & Blogs",
        items: &[
            ResourceItem {
                name: "RefactoringGuru",
                url: Some("https://refactoring.guru/"),
                description: "Explanations and examples of design patterns",
            },
            ResourceItem {
                name: "SourceMaking",
                url: Some("https://sourcemaking.com/"),
                description: "Design patterns, antipatterns, refactoring, UML",
            },
            ResourceItem {
                name: "Martin Fowler's Blog",
                url: Some("https://martinfowler.com/"),
                description: "Articles on software design, patterns and architecture",
            },
        ],
    },
    ResourceCategory {
        title: "Tools",
        items: &[
            ResourceItem {
                name: "PlantUML",
                url: Some("https://plantuml.com/"),
                description: "Tool to create UML diagrams from text description",
            },
            ResourceItem {
                name: "draw.io",
                url: Some("https://www.draw.io/"),
                description: "Free online diagram software for making flowcharts, process diagrams, etc.",
            },
            ResourceItem {
                name: "Visual Paradigm",
                url: None,
                description: "UML tool that supports all UML, SysML and ERD diagrams",
            },
        ],
    },
];

/// Footer link columns; entries without a page use `#`
pub const FOOTER_COLUMNS: [(&str, &[Link]); 3] = [
    (
        "Learn",
        &[
            Link { title: "Roadmap", path: "/roadmap" },
            Link { title: "Design Patterns", path: "/patterns" },
            Link { title: "Resources", path: "/resources" },
        ],
    ),
    (
        "Resources",
        &[
            Link { title: "Cheat Sheets", path: "#" },
            Link { title: "Interview Prep", path: "#" },
            Link { title: "Recommended Books", path: "/resources" },
        ],
    ),
    (
        "About",
        &[
            Link { title: "About Us", path: "#" },
            Link { title: "Contact", path: "#" },
            Link { title: "Privacy Policy", path: "#" },
        ],
    ),
];
