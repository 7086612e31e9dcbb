//! Ready-made patterns with sample text to try them on

/// A named pattern and a subject it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexExample {
    pub name: &'static str,
    pub pattern: &'static str,
    pub sample: &'static str,
}

pub const EXAMPLES: &[RegexExample] = &[
    RegexExample {
        name: "email",
        pattern: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        sample: "Contacts: juan@example.com, maria@test.org and info@company.es",
    },
    RegexExample {
        name: "phone",
        pattern: r"\+?[0-9]{1,3}[-.\s]?\(?[0-9]{2,3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
        sample: "Call us: +34 (91) 234 5678 or +1-555-123-4567",
    },
    RegexExample {
        name: "url",
        pattern: r"https?://[\w.-]+(?:/[\w./-]*)?",
        sample: "Visit https://example.com/page or http://test.org",
    },
    RegexExample {
        name: "date",
        pattern: r"\d{2}[/-]\d{2}[/-]\d{4}",
        sample: "Dates: 15/01/2024, 28-02-2025, 31/12/2023",
    },
];

/// Look up an example by name, ignoring case
pub fn example(name: &str) -> Option<&'static RegexExample> {
    EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
