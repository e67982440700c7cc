//! Company/date header recognition and parsing.
//!
//! Supported header shapes:
//!
//! - `Company | Date`
//! - `Company - Date` (also `–` and `—`)
//! - `Company (Date)`
//! - `Company | Date` on the first line with the role on the second line
//! - `Job title | Company | Industry | Date`
//! - anything else is taken as a role

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static JOB_TITLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^((?:Senior|Junior|Lead|Principal|Staff)?\s*(?:Software|Web|Mobile|Frontend|Backend|Full-stack|Full Stack|UI|UX)?\s*(?:Developer|Engineer|Architect|Designer|Programmer|Consultant))\s*\|(.*?)\|(.*?)\|(.*\d{4}.*)$",
    )
    .unwrap()
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

static MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b").unwrap()
});

static PAREN_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+\(\s*(19|20)\d{2}").unwrap());

static PAREN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*?)\s*\((.*?)\)\s*$").unwrap());

const DASH_SEPARATORS: [&str; 3] = [" - ", " – ", " — "];

/// Role, company and date range parsed from a header line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHeader {
    /// Role or job title
    pub role: String,
    /// Company
    pub company: String,
    /// Date range
    pub date_range: String,
}

impl ParsedHeader {
    fn new(role: &str, company: &str, date_range: &str) -> Self {
        Self {
            role: role.trim().to_string(),
            company: company.trim().to_string(),
            date_range: date_range.trim().to_string(),
        }
    }
}

/// Check if a line looks like a company/date header.
///
/// The line must carry a date signal (a year, a month abbreviation or
/// "present"), have at least two words, and contain a separator token.
pub fn looks_like_company_date(text: &str) -> bool {
    let text = text.trim();
    if JOB_TITLE_HEADER.is_match(text) {
        return true;
    }

    let lower = text.to_lowercase();
    let has_date = YEAR.is_match(&lower) || MONTH.is_match(&lower) || lower.contains("present");
    if !has_date || lower.split_whitespace().count() < 2 {
        return false;
    }

    text.contains('|')
        || DASH_SEPARATORS.iter().any(|sep| text.contains(sep))
        || text.contains('(')
        || lower.contains(" to ")
        || PAREN_YEAR.is_match(text)
}

/// Parse a header line into role, company and date range.
pub fn parse_header(text: &str) -> ParsedHeader {
    let text = text.trim();

    if let Some(caps) = JOB_TITLE_HEADER.captures(text) {
        let mut company = caps[2].trim().to_string();
        let industry = caps[3].trim();
        if !industry.is_empty() {
            company = format!("{} | {}", company, industry);
        }
        return ParsedHeader::new(&caps[1], &company, &caps[4]);
    }

    if text.contains('\n') {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if let Some(first) = lines.first().filter(|l| l.contains('|')) {
            let parts: Vec<&str> = first.split('|').collect();
            let role = lines.get(1).copied().unwrap_or_default();
            return ParsedHeader::new(role, parts[0], parts[parts.len() - 1]);
        }
    }

    if text.contains('|') {
        let parts: Vec<&str> = text.split('|').collect();
        return ParsedHeader::new("", parts[0], parts[parts.len() - 1]);
    }

    if let Some(sep) = DASH_SEPARATORS.iter().find(|sep| text.contains(*sep)) {
        let parts: Vec<&str> = text.split(sep).collect();
        if parts.len() == 2 {
            return ParsedHeader::new("", parts[0], parts[1]);
        }
    }

    if let Some(caps) = PAREN_SUFFIX.captures(text) {
        return ParsedHeader::new("", &caps[1], &caps[2]);
    }

    ParsedHeader::new(text, "", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_header() {
        let parsed = parse_header("ABC Company | Jan 2020 - Present");
        assert_eq!(parsed.company, "ABC Company");
        assert_eq!(parsed.date_range, "Jan 2020 - Present");
        assert_eq!(parsed.role, "");
    }

    #[test]
    fn test_pipe_header_takes_last_segment() {
        let parsed = parse_header("Globex | Remote | 2019 - 2021");
        assert_eq!(parsed.company, "Globex");
        assert_eq!(parsed.date_range, "2019 - 2021");
    }

    #[test]
    fn test_multiline_header_role_from_second_line() {
        let parsed = parse_header("Initech | 2018 - 2020\nSenior Data Engineer");
        assert_eq!(parsed.company, "Initech");
        assert_eq!(parsed.date_range, "2018 - 2020");
        assert_eq!(parsed.role, "Senior Data Engineer");
    }

    #[test]
    fn test_dash_header() {
        let parsed = parse_header("Umbrella Corp – 2017");
        assert_eq!(parsed.company, "Umbrella Corp");
        assert_eq!(parsed.date_range, "2017");
    }

    #[test]
    fn test_dash_header_with_three_parts_falls_through() {
        let parsed = parse_header("Acme - Jan 2020 - Present");
        assert_eq!(parsed.role, "Acme - Jan 2020 - Present");
        assert_eq!(parsed.company, "");
    }

    #[test]
    fn test_paren_header() {
        let parsed = parse_header("Hooli (2015 to 2018)");
        assert_eq!(parsed.company, "Hooli");
        assert_eq!(parsed.date_range, "2015 to 2018");
    }

    #[test]
    fn test_job_title_header() {
        let parsed = parse_header("Senior Software Engineer | Stark Industries | Defense | 2016 - 2019");
        assert_eq!(parsed.role, "Senior Software Engineer");
        assert_eq!(parsed.company, "Stark Industries | Defense");
        assert_eq!(parsed.date_range, "2016 - 2019");
    }

    #[test]
    fn test_role_only() {
        let parsed = parse_header("Platform Engineer");
        assert_eq!(parsed.role, "Platform Engineer");
        assert_eq!(parsed.company, "");
        assert_eq!(parsed.date_range, "");
    }

    #[test]
    fn test_looks_like_company_date() {
        assert!(looks_like_company_date("ABC Company | Jan 2020 - Present"));
        assert!(looks_like_company_date("Umbrella Corp - 2017"));
        assert!(looks_like_company_date("Hooli (2015 to 2018)"));
        assert!(looks_like_company_date("Wayne Enterprises, March 2019 to present"));
        assert!(looks_like_company_date("Developer | Acme | Retail | 2021"));
        assert!(!looks_like_company_date("Built a 2020 reporting tool"));
        assert!(!looks_like_company_date("Present"));
        assert!(!looks_like_company_date("Work Experience"));
    }
}
