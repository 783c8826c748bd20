// File: ./src/model/subjects.rs
// Subject code handling: the source tags each procedure with dotted
// legislative codes ("3.10.04 Agriculture, 7.40 Justice"). Filtering only
// cares about the leading digit; the details pane only cares about the names.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// The nine top-level EU policy areas, keyed by the leading code digit.
pub static SUBJECT_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1", "European citizenship"),
        ("2", "Internal market, single market"),
        ("3", "Community policies"),
        ("4", "Economic, social and territorial cohesion"),
        ("5", "Economic and monetary system"),
        ("6", "External relations of the Union"),
        ("7", "Area of freedom, security and justice"),
        ("8", "State and evolution of the Union"),
        ("9", "Other topics"),
    ])
});

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([1-9])(?:\.\d+)+").unwrap());

static CODE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\s*,\s*)?\d+(?:\.\d+)+\s*").unwrap());

/// Display label for a top-level subject code.
/// Codes outside the known table get a generic label instead of vanishing.
pub fn label_for(code: &str) -> String {
    match SUBJECT_LABELS.get(code) {
        Some(label) => (*label).to_string(),
        None => format!("Subject {}", code),
    }
}

/// Extracts the distinct leading digits from dotted subject codes,
/// ascending. "2.10.02 Foo, 3.30 Bar, 2.10 Baz" -> ["2", "3"].
pub fn extract_codes(text: &str) -> Vec<String> {
    let mut codes = BTreeSet::new();
    for cap in CODE_RE.captures_iter(text) {
        codes.insert(cap[1].to_string());
    }
    codes.into_iter().collect()
}

/// Strips the dotted codes (and their separating commas) out of a subjects
/// string, leaving the human-readable names.
pub fn clean_subject_names(text: &str) -> Vec<String> {
    CODE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
