//! Raw input handling: normalization, search categories and yes/no answers
//!
//! Nothing in here fails. Unrecognized input comes back as a distinct value
//! (`Category::parse` → `None`, `Answer::Malformed`) for the caller to branch on.

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring test. `term` must already be normalized.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

/// What a search is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `банк`: bank summary, no search term
    Bank,
    /// `филиал`: branch name search
    Branch,
    /// `вклад`: depositor name search
    Deposit,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Bank, Category::Branch, Category::Deposit];

    /// Keyword as typed at the prompt.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Bank => "банк",
            Category::Branch => "филиал",
            Category::Deposit => "вклад",
        }
    }

    /// Match a raw category string after normalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        Self::ALL
            .into_iter()
            .find(|category| category.keyword() == normalized)
    }
}

/// Reply to the "search again?" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Not a recognized token; only produced in strict mode
    Malformed(String),
}

/// Parse a yes/no reply.
///
/// Strict mode accepts only `y` and `n`; anything else is `Malformed`.
/// Lenient mode treats everything except `y` as `No`.
pub fn parse_answer(raw: &str, strict: bool) -> Answer {
    match normalize(raw).as_str() {
        "y" => Answer::Yes,
        "n" => Answer::No,
        other if strict => Answer::Malformed(other.to_string()),
        _ => Answer::No,
    }
}
