use rand::Rng;
use serde::Serialize;

pub const DEFAULT_ADVICE: &[&str] = &["Keep building your expertise and networking in your domain!"];

const CAREER_ADVICE: &[(&str, &[&str])] = &[
    (
        "Clerk",
        &[
            "Learn spreadsheet tools like Excel and automation basics.",
            "Improve time management and digital record handling.",
        ],
    ),
    (
        "Customer Support",
        &[
            "Master CRM tools like Salesforce.",
            "Sharpen your empathy and conflict resolution skills.",
        ],
    ),
    (
        "Data Analyst",
        &[
            "Master SQL, Python, and Tableau/Power BI.",
            "Turn raw data into actionable business insights.",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Practice machine learning & deep learning.",
            "Participate in Kaggle, learn PyTorch & Big Data tools.",
        ],
    ),
    (
        "Director",
        &[
            "Lead with strategic thinking and vision.",
            "Learn stakeholder management and business transformation.",
        ],
    ),
    (
        "HR Manager",
        &[
            "Strengthen HR analytics and labor law knowledge.",
            "Upskill in employee engagement & DEI practices.",
        ],
    ),
    (
        "Product Manager",
        &[
            "Learn agile, SCRUM, and user-centric design.",
            "Blend business acumen with data-driven decisions.",
        ],
    ),
    (
        "Software Engineer",
        &[
            "Sharpen coding, DSA, and system design.",
            "Master DevOps, scalable systems, and cloud tech.",
        ],
    ),
    (
        "Technician",
        &[
            "Learn diagnostics and automation tools.",
            "Certify in hardware, networking, or cloud services.",
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub fn render(&self) -> String {
        format!("'{}' - {}", self.text, self.author)
    }
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "The future depends on what you do today.",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "Success usually comes to those who are too busy to be looking for it.",
        author: "Henry David Thoreau",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
    Quote {
        text: "Opportunities don't happen, you create them.",
        author: "Chris Grosser",
    },
    Quote {
        text: "Your career is your business. It's time for you to manage it as a CEO.",
        author: "Dorit Sher",
    },
];

/// Source of the index used to pick a decorative quote.
pub trait QuotePicker {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by any `rand` generator.
#[derive(Debug)]
pub struct RandomPicker<R>(pub R);

impl<R: Rng> QuotePicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Always selects the same position; wraps around when out of range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl QuotePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

pub fn select_quote<P: QuotePicker + ?Sized>(quotes: &[Quote], picker: &mut P) -> Option<Quote> {
    if quotes.is_empty() {
        return None;
    }
    quotes.get(picker.pick(quotes.len())).copied()
}

/// Advice strings and quotes shown next to a prediction.
#[derive(Debug, Clone)]
pub struct CareerGuidance {
    advice: &'static [(&'static str, &'static [&'static str])],
    quotes: &'static [Quote],
}

impl CareerGuidance {
    pub(crate) const fn standard() -> Self {
        Self {
            advice: CAREER_ADVICE,
            quotes: QUOTES,
        }
    }

    pub fn advice_for(&self, job_title: &str) -> &'static [&'static str] {
        self.advice
            .iter()
            .find(|(title, _)| *title == job_title)
            .map(|(_, tips)| *tips)
            .unwrap_or(DEFAULT_ADVICE)
    }

    pub fn quotes(&self) -> &'static [Quote] {
        self.quotes
    }

    pub fn quote<P: QuotePicker + ?Sized>(&self, picker: &mut P) -> Option<Quote> {
        select_quote(self.quotes, picker)
    }
}
