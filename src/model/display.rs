// File: ./src/model/display.rs
use crate::model::item::Procedure;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const SUMMARY_PLACEHOLDER: &str = "Summary currently being updated...";
pub const MISSING_SUMMARY: &str = "The proposal hasn't been posted yet.";

pub trait ProcedureDisplay {
    fn status_symbol(&self) -> &'static str;
    fn subject_badges(&self) -> String;
    fn list_line(&self) -> String;
}

impl ProcedureDisplay for Procedure {
    fn status_symbol(&self) -> &'static str {
        self.status.symbol()
    }

    /// Compact code badges for the list row, e.g. "#2 #7".
    fn subject_badges(&self) -> String {
        self.subjects
            .iter()
            .map(|c| format!("#{}", c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One plain-text row per procedure, shared by the export command.
    fn list_line(&self) -> String {
        let badges = self.subject_badges();
        if badges.is_empty() {
            format!(
                "{} {}  {}  {}",
                self.status_symbol(),
                self.reference,
                self.date_label,
                self.title
            )
        } else {
            format!(
                "{} {}  {}  {}  {}",
                self.status_symbol(),
                self.reference,
                self.date_label,
                self.title,
                badges
            )
        }
    }
}

/// Trims a summary back to its last complete sentence. Summaries are
/// generated upstream and sometimes arrive cut off mid-sentence.
pub fn tidy_summary(text: &str) -> String {
    match text.rfind(['.', '!', '?']) {
        Some(idx) => text[..=idx].trim().to_string(),
        None => SUMMARY_PLACEHOLDER.to_string(),
    }
}

/// Truncates to a terminal column budget, ending with an ellipsis when cut.
/// Width-aware so CJK and other wide characters don't overflow the cell.
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ProcedureStatus;

    #[test]
    fn tidy_summary_cuts_back_to_last_sentence() {
        assert_eq!(
            tidy_summary("First point. Second point! Trailing frag"),
            "First point. Second point!"
        );
        assert_eq!(tidy_summary("Is it done? almo"), "Is it done?");
    }

    #[test]
    fn tidy_summary_without_terminator_uses_placeholder() {
        assert_eq!(tidy_summary("no punctuation here"), SUMMARY_PLACEHOLDER);
        assert_eq!(tidy_summary(""), SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("exactly-10", 10), "exactly-10");
        assert_eq!(truncate_ellipsis("a bit too long", 8), "a bit t…");
        assert_eq!(truncate_ellipsis("anything", 0), "");
    }

    #[test]
    fn list_line_carries_status_and_badges() {
        let mut p = Procedure::new("2025/0042(COD)", "Digital fairness act");
        p.status = ProcedureStatus::Completed;
        p.date_label = "02 Jun. 2025".to_string();
        p.subjects = vec!["2".to_string(), "3".to_string()];

        let line = p.list_line();
        assert!(line.starts_with("[✔] 2025/0042(COD)"));
        assert!(line.contains("02 Jun. 2025"));
        assert!(line.ends_with("#2 #3"));
    }
}
