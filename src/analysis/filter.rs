//! Shape predicate deciding whether text looks like a heading.
//!
//! The predicate only looks at the text. The font-size floor is applied
//! separately when candidates are collected.

use super::OutlineOptions;

/// Check if text could be a heading.
///
/// Rejects empty or long text, text ending in `.` or `,`, and bare numbers.
/// Accepts anything containing CJK ideographs. Cased text must be entirely
/// title case or upper case. Uncased text needs a digit within its first
/// three characters (numbered headings like "3.2").
pub fn is_likely_heading(text: &str, options: &OutlineOptions) -> bool {
    if text.is_empty()
        || text.split_whitespace().count() > options.heading_max_words
        || text.chars().count() > options.heading_max_chars
    {
        return false;
    }

    if text.ends_with('.') || text.ends_with(',') {
        return false;
    }

    if text.chars().all(char::is_numeric) {
        return false;
    }

    if text.chars().any(is_cjk_ideograph) {
        return true;
    }

    if has_cased_letters(text) {
        return is_title_case(text) || is_upper_case(text);
    }

    text.chars().take(3).any(char::is_numeric)
}

/// CJK Unified Ideographs block.
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Whether the text contains any upper- or lowercase letter.
pub fn has_cased_letters(text: &str) -> bool {
    text.chars().any(is_cased)
}

/// Every word starts with an uppercase letter followed only by lowercase
/// letters, where a "word" is any run of cased characters.
///
/// "1. Introduction" and "Chapter Two" qualify; "Results of the study" and
/// "McDonald" do not.
pub fn is_title_case(text: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// At least one cased letter and no lowercase letters.
pub fn is_upper_case(text: &str) -> bool {
    has_cased_letters(text) && !text.chars().any(char::is_lowercase)
}
