use std::fmt;

use crate::constants::constants;

/// A single rejection rule. Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    AllDigits,
    DigitsWithoutLetters,
    TooShort,
    Placeholder,
    Blank,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::AllDigits,
        Rule::DigitsWithoutLetters,
        Rule::TooShort,
        Rule::Placeholder,
        Rule::Blank,
    ];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::AllDigits => "all digits",
            Rule::DigitsWithoutLetters => "digits without letters",
            Rule::TooShort => "too short",
            Rule::Placeholder => "placeholder",
            Rule::Blank => "blank",
        };
        f.write_str(name)
    }
}

/// `^\d+$` over ASCII digits.
pub fn is_all_digits(entry: &str) -> bool {
    !entry.is_empty() && entry.chars().all(|c| c.is_ascii_digit())
}

/// At least one numeric character and no alphabetic character anywhere,
/// e.g. `#123`, `12-34.` or full-width `１２３`.
pub fn is_digits_without_letters(entry: &str) -> bool {
    entry.chars().any(char::is_numeric) && !entry.chars().any(char::is_alphabetic)
}

pub fn is_too_short(entry: &str, min_length: usize) -> bool {
    entry.chars().count() < min_length
}

pub fn is_placeholder<S: AsRef<str>>(entry: &str, tokens: &[S]) -> bool {
    tokens.iter().any(|token| token.as_ref() == entry)
}

pub fn is_blank(entry: &str) -> bool {
    entry.is_empty()
}

/// Decides whether a normalized entry is kept.
///
/// The built-in minimum length and placeholder tokens always apply;
/// overrides can only raise the minimum or add placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityFilter {
    min_length: usize,
    placeholders: Vec<String>,
}

impl ValidityFilter {
    pub fn with_overrides<I, S>(min_length: Option<usize>, extra_placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut placeholders: Vec<String> = constants::PLACEHOLDER_TOKENS
            .iter()
            .map(|token| token.to_string())
            .collect();
        for token in extra_placeholders {
            let token = crate::cleaner::normalize(token.as_ref());
            if !placeholders.contains(&token) {
                placeholders.push(token);
            }
        }

        Self {
            min_length: min_length
                .unwrap_or(constants::MIN_ENTRY_LENGTH)
                .max(constants::MIN_ENTRY_LENGTH),
            placeholders,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    fn matches(&self, rule: Rule, entry: &str) -> bool {
        match rule {
            Rule::AllDigits => is_all_digits(entry),
            Rule::DigitsWithoutLetters => is_digits_without_letters(entry),
            Rule::TooShort => is_too_short(entry, self.min_length),
            Rule::Placeholder => is_placeholder(entry, self.placeholders.as_slice()),
            Rule::Blank => is_blank(entry),
        }
    }

    /// The first rule rejecting `entry`, or `None` if it is kept.
    pub fn rejection(&self, entry: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|&rule| self.matches(rule, entry))
    }

    pub fn is_valid(&self, entry: &str) -> bool {
        self.rejection(entry).is_none()
    }
}

impl Default for ValidityFilter {
    fn default() -> Self {
        Self::with_overrides(None, Vec::<String>::new())
    }
}

/// Checks a normalized entry against the default rules.
pub fn is_valid(entry: &str) -> bool {
    ValidityFilter::default().is_valid(entry)
}
