//! Mock "course success guide" data.
//!
//! Stands in for a crowd-sourced aggregate that does not exist yet. Output
//! shape depends only on the course code; values come from the supplied RNG,
//! so callers pass `thread_rng()` in production and a seeded `StdRng` in tests.

mod types;

pub use types::*;

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

const DEFAULT_TOPICS: &[&str] = &[
    "Core Concepts",
    "Critical Thinking",
    "Research Methods",
    "Group Projects",
    "Essay Writing",
    "Final Exam Prep",
    "Time Management",
    "Case Studies",
];

const ADVICE_TEMPLATES: &[&str] = &[
    "Focus heavily on {topic}. It was 40% of the midterm.",
    "Don't skip the readings for {topic}, the professor loves to quiz on the footnotes.",
    "The labs are free marks, but the final on {topic} is brutal. Start studying two weeks early.",
    "Best course I've taken! {topic} is actually really useful for interviews.",
    "Make sure you understand {topic} inside out. It builds on everything else.",
];

const PERSONALITY_TAGS: &[&str] = &["Tough Grader", "Respected", "Inspirational"];
const STYLE_TAGS: &[&str] = &["Lecture Heavy", "Textbook Mandatory", "Clear Grading"];
const IMPORTANCE: &[&str] = &["High", "Critical", "Medium"];
const REVIEW_SEMESTERS: &[&str] = &["Spring 2024", "Fall 2023", "Summer 2024"];

/// Topic pool for a department, falling back to generic topics.
pub fn topics_for(department: &str) -> &'static [&'static str] {
    match department.to_uppercase().as_str() {
        "CMPT" => &[
            "Binary Trees",
            "Recursion",
            "Memory Management",
            "Pointers",
            "Big O Notation",
            "Graph Algorithms",
            "Dynamic Programming",
            "Concurrency",
        ],
        "MATH" => &[
            "Derivatives",
            "Integrals",
            "Matrix Multiplication",
            "Eigenvalues",
            "Vector Spaces",
            "Series & Sequences",
            "Proof by Induction",
            "Limits",
        ],
        "BUS" => &[
            "SWOT Analysis",
            "Financial Ratios",
            "Marketing Mix",
            "Supply Chain",
            "Organizational Behavior",
            "Accounting Principles",
            "Business Ethics",
            "Macroeconomics",
        ],
        _ => DEFAULT_TOPICS,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Uniform float in `[min, max)` rounded to one decimal.
fn one_decimal<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    (rng.gen_range(min..max) * 10.0).round() / 10.0
}

fn advice<R: Rng + ?Sized>(rng: &mut R, topic: &str) -> String {
    pick(rng, ADVICE_TEMPLATES).replace("{topic}", topic)
}

/// Generates a guide for `course_code` ("CMPT 225").
pub fn generate_course_guide<R: Rng + ?Sized>(course_code: &str, rng: &mut R) -> CourseGuide {
    let department = course_code.split_whitespace().next().unwrap_or_default();
    let topics = topics_for(department);

    let profs: Vec<ProfessorSummary> = (0..rng.gen_range(2..=4))
        .map(|i| ProfessorSummary {
            id: format!("prof-{}", i),
            name: format!("Dr. {} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
            rating: one_decimal(rng, 2.5, 5.0),
            difficulty: one_decimal(rng, 2.0, 4.8),
            would_take_again: format!("{}%", rng.gen_range(40..=98)),
            tags: vec![
                pick(rng, PERSONALITY_TAGS).to_string(),
                pick(rng, STYLE_TAGS).to_string(),
            ],
        })
        .collect();

    let stats = CourseStats {
        difficulty: one_decimal(rng, 2.5, 5.0),
        workload: one_decimal(rng, 3.0, 5.0),
        valuable: one_decimal(rng, 3.5, 5.0),
        grade_distribution: [("A", 10..=25), ("B", 30..=45), ("C", 20..=30), ("D/F", 5..=15)]
            .into_iter()
            .map(|(grade, range)| GradeBucket {
                grade: grade.to_string(),
                percent: rng.gen_range(range),
            })
            .collect(),
    };

    let first_prof = profs[0].name.clone();
    let second_prof = profs.get(1).map_or_else(|| first_prof.clone(), |p| p.name.clone());
    let syllabi = vec![
        Syllabus {
            term: "Spring 2025".to_string(),
            prof: first_prof,
            url: "#".to_string(),
        },
        Syllabus {
            term: "Fall 2024".to_string(),
            prof: second_prof,
            url: "#".to_string(),
        },
        Syllabus {
            term: "Summer 2024".to_string(),
            prof: "Dr. T. Unknown".to_string(),
            url: "#".to_string(),
        },
    ];

    // Four draws, deduplicated in draw order.
    let mut seen = HashSet::new();
    let key_topics: Vec<&str> = (0..4)
        .map(|_| pick(rng, topics))
        .filter(|t| seen.insert(*t))
        .collect();

    let focus = key_topics
        .iter()
        .map(|topic| FocusTopic {
            topic: topic.to_string(),
            importance: pick(rng, IMPORTANCE).to_string(),
            tip: advice(rng, topic),
        })
        .collect();

    let notes = (0..rng.gen_range(3..=6))
        .map(|i| NoteSummary {
            title: format!("{} Summary Notes", key_topics[i % key_topics.len()]),
            author: format!("Student{}", rng.gen_range(100..=999)),
            upvotes: rng.gen_range(5..=500),
            date: "2 months ago".to_string(),
        })
        .collect();

    let reviews = (0..rng.gen_range(3..=5))
        .map(|_| {
            let topic = pick(rng, topics);
            AlumniReview {
                author: format!("Alumni '{}", rng.gen_range(22..=25)),
                rating: rng.gen_range(3..=5),
                comment: advice(rng, topic),
                semester: pick(rng, REVIEW_SEMESTERS).to_string(),
            }
        })
        .collect();

    CourseGuide {
        course_code: course_code.to_string(),
        profs,
        stats,
        syllabi,
        focus,
        notes,
        reviews,
        resources: vec![
            ResourceLink {
                title: "Official Course Page".to_string(),
                url: "https://sfu.ca".to_string(),
            },
            ResourceLink {
                title: "Discord Community".to_string(),
                url: "#".to_string(),
            },
        ],
    }
}
