//! Grounding check for contact details.
//!
//! The model must never invent data. Contact fields are short, exact strings,
//! so a value that cannot be found in the source text is almost certainly
//! made up. Those fields are reported, never rewritten.

use crate::resume::models::StructuredResume;

/// Phone numbers shorter than this are too ambiguous to check.
const MIN_PHONE_DIGITS: usize = 7;
/// Subscriber number length once a country code is dropped.
const NATIONAL_PHONE_DIGITS: usize = 10;

/// Dotted paths of non-empty contact fields that do not occur in `source`.
pub fn unverified_fields(resume: &StructuredResume, source: &str) -> Vec<String> {
    let info = &resume.personal_information;
    let haystack = squash(source);
    let source_digits = digits(source);

    let mut unverified = Vec::new();
    let mut check = |name: &str, found: bool| {
        if !found {
            unverified.push(format!("personal_information.{name}"));
        }
    };

    if !info.full_name.trim().is_empty() {
        check("full_name", haystack.contains(&squash(&info.full_name)));
    }
    if !info.email.trim().is_empty() {
        check("email", haystack.contains(&squash(&info.email)));
    }
    if !info.phone_number.trim().is_empty() {
        let phone = digits(&info.phone_number);
        let national = &phone[phone.len().saturating_sub(NATIONAL_PHONE_DIGITS)..];
        check(
            "phone_number",
            phone.len() < MIN_PHONE_DIGITS
                || source_digits.contains(&phone)
                || source_digits.contains(national),
        );
    }
    for (name, url) in [
        ("linkedin_profile", &info.linkedin_profile),
        ("github_profile", &info.github_profile),
        ("portfolio_website", &info.portfolio_website),
    ] {
        if !url.trim().is_empty() {
            check(name, haystack.contains(&squash(bare_url(url))));
        }
    }

    unverified
}

/// Lowercase with all whitespace removed. PDF extraction splits and joins
/// words unpredictably, so spacing never counts.
fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// `https://www.linkedin.com/in/jane/` → `linkedin.com/in/jane`
fn bare_url(url: &str) -> &str {
    let url = url.trim();
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let url = url.strip_prefix("www.").unwrap_or(url);
    url.trim_end_matches('/')
}
