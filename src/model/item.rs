// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Simplified lifecycle status of a procedure.
///
/// The source data carries free-form stage strings ("Awaiting committee
/// decision", "Procedure lapsed or withdrawn", ...). Only one of them means
/// the procedure is finished; everything else counts as ongoing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcedureStatus {
    Ongoing,
    Completed,
}

impl ProcedureStatus {
    pub fn from_stage(stage: &str) -> Self {
        if stage == "Procedure completed" {
            Self::Completed
        } else {
            Self::Ongoing
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Completed => "[✔]",
            Self::Ongoing => "[▶]",
        }
    }
}

impl std::fmt::Display for ProcedureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One legislative procedure, as shown on a card in the list.
///
/// Derived fields (`status`, `year`, `subjects`, `date_raw`, `date_label`)
/// are computed once at snapshot load by the adapter; missing source data
/// degrades to empty strings / fallback labels rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    /// Interinstitutional reference, e.g. "2025/0042(COD)".
    pub reference: String,
    pub title: String,
    pub status: ProcedureStatus,
    /// Raw stage text from the source, for the details pane.
    pub stage: String,

    /// Year of the latest event ("" when no event date could be parsed).
    pub year: String,
    /// Top-level subject codes ("1".."9"), deduplicated and sorted.
    pub subjects: Vec<String>,
    /// Human-readable subject names for the details pane.
    pub subject_names: Vec<String>,

    /// Sortable date of the latest event as "YYYY-MM-DD" ("" when unknown).
    /// List ordering compares these strings directly.
    pub date_raw: String,
    /// Display form of the latest event date, or "Unknown date".
    pub date_label: String,

    pub summary: Option<String>,
}

impl Procedure {
    pub fn new(reference: &str, title: &str) -> Self {
        Self {
            reference: reference.to_string(),
            title: title.to_string(),
            status: ProcedureStatus::Ongoing,
            stage: String::new(),
            year: String::new(),
            subjects: Vec::new(),
            subject_names: Vec::new(),
            date_raw: String::new(),
            date_label: "Unknown date".to_string(),
            summary: None,
        }
    }

    pub fn has_subject(&self, code: &str) -> bool {
        self.subjects.iter().any(|c| c == code)
    }
}
