// File: ./src/model/filter.rs
// Filter and sort logic for the procedure list. Selections within a group
// OR together, groups AND together, an empty group matches everything.
use crate::model::item::{Procedure, ProcedureStatus};
use crate::model::subjects;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use strum::{EnumIter, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn value(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    /// Anything that isn't explicitly ascending is treated as the default.
    pub fn from_value(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Desc => "Newest first",
            Self::Asc => "Oldest first",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Desc => Self::Asc,
            Self::Asc => Self::Desc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ProcedureStatus {
    /// Wire value used by filter selections ("ONGOING"/"COMPLETED").
    pub fn value(&self) -> &'static str {
        match self {
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
        }
    }
}

/// The four sections of the filter popup.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum FilterGroup {
    Status,
    Years,
    Subjects,
    Order,
}

impl FilterGroup {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Status => "STATUS",
            Self::Years => "YEARS",
            Self::Subjects => "SUBJECTS",
            Self::Order => "ORDER",
        }
    }

    /// Order is a radio group; the rest are checkboxes.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Order)
    }
}

/// One selectable row in the filter popup.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub group: FilterGroup,
}

impl FilterOption {
    fn new(value: impl Into<String>, label: impl Into<String>, group: FilterGroup) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            group,
        }
    }
}

/// Every option the popup offers, in display order. Built once from the
/// loaded procedures and never rebuilt afterwards, so toggling filters
/// cannot make options appear or disappear.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    pub options: Vec<FilterOption>,
}

impl FilterCatalog {
    pub fn build(
        procedures: &[Procedure],
        subject_overrides: &HashMap<String, String>,
    ) -> Self {
        let mut options = Vec::new();

        for status in ProcedureStatus::iter() {
            options.push(FilterOption::new(
                status.value(),
                status.label(),
                FilterGroup::Status,
            ));
        }

        // Distinct non-empty years, newest first.
        let mut years: Vec<String> = procedures
            .iter()
            .map(|p| p.year.clone())
            .filter(|y| !y.is_empty())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_by(|a, b| numeric_cmp_desc(a, b));
        for year in years {
            options.push(FilterOption::new(year.clone(), year, FilterGroup::Years));
        }

        // Distinct subject codes, lowest first.
        let mut codes: Vec<String> = procedures
            .iter()
            .flat_map(|p| p.subjects.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        codes.sort_by(|a, b| numeric_cmp(a, b));
        for code in codes {
            let label = subject_overrides
                .get(&code)
                .cloned()
                .unwrap_or_else(|| subjects::label_for(&code));
            options.push(FilterOption::new(code, label, FilterGroup::Subjects));
        }

        for order in SortOrder::iter() {
            options.push(FilterOption::new(
                order.value(),
                order.label(),
                FilterGroup::Order,
            ));
        }

        Self { options }
    }

    pub fn group(&self, group: FilterGroup) -> impl Iterator<Item = &FilterOption> {
        self.options.iter().filter(move |o| o.group == group)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Numeric-first comparison for option values. Numeric values order by
/// magnitude; anything unparseable sorts after all numbers, alphabetically.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Newest-first variant for the years row. Numbers descend; anything
/// unparseable still sorts after all numbers, alphabetically. Swapping the
/// arguments of `numeric_cmp` would reverse those fallback arms too.
fn numeric_cmp_desc(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => y.cmp(&x),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// The user's current selections across all four groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub statuses: HashSet<String>,
    pub years: HashSet<String>,
    pub subjects: HashSet<String>,
    pub order: SortOrder,
}

impl FilterState {
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Flips one option. Checkbox groups toggle membership; the order group
    /// is a radio, so toggling just selects the given value.
    pub fn toggle(&mut self, group: FilterGroup, value: &str) {
        match group {
            FilterGroup::Status => toggle_value(&mut self.statuses, value),
            FilterGroup::Years => toggle_value(&mut self.years, value),
            FilterGroup::Subjects => toggle_value(&mut self.subjects, value),
            FilterGroup::Order => self.order = SortOrder::from_value(value),
        }
    }

    pub fn is_selected(&self, group: FilterGroup, value: &str) -> bool {
        match group {
            FilterGroup::Status => self.statuses.contains(value),
            FilterGroup::Years => self.years.contains(value),
            FilterGroup::Subjects => self.subjects.contains(value),
            FilterGroup::Order => self.order.value() == value,
        }
    }

    /// Clears every checkbox and restores the default (descending) order.
    pub fn reset(&mut self) {
        self.statuses.clear();
        self.years.clear();
        self.subjects.clear();
        self.order = SortOrder::default();
    }

    pub fn is_active(&self) -> bool {
        !self.statuses.is_empty()
            || !self.years.is_empty()
            || !self.subjects.is_empty()
            || self.order != SortOrder::default()
    }

    /// A procedure is visible iff every non-empty group accepts it.
    /// Subject matching is set intersection: any shared code counts.
    pub fn matches(&self, procedure: &Procedure) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(procedure.status.value()) {
            return false;
        }
        if !self.years.is_empty() && !self.years.contains(procedure.year.as_str()) {
            return false;
        }
        if !self.subjects.is_empty()
            && !procedure
                .subjects
                .iter()
                .any(|code| self.subjects.contains(code.as_str()))
        {
            return false;
        }
        true
    }

    /// Short footer summary like "status:1 years:2 oldest first".
    pub fn active_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.statuses.is_empty() {
            parts.push(format!("status:{}", self.statuses.len()));
        }
        if !self.years.is_empty() {
            parts.push(format!("years:{}", self.years.len()));
        }
        if !self.subjects.is_empty() {
            parts.push(format!("subjects:{}", self.subjects.len()));
        }
        if self.order != SortOrder::default() {
            parts.push("oldest first".to_string());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  "))
        }
    }
}

fn toggle_value(set: &mut HashSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Orders procedures by their raw date string. Plain lexicographic
/// comparison; "YYYY-MM-DD" keys make that chronological, and empty keys
/// (unknown dates) sink to the bottom of the default descending view.
/// The sort is stable, so equal dates keep their relative order.
pub fn sort_procedures(procedures: &mut [Procedure], order: SortOrder) {
    procedures.sort_by(|a, b| match order {
        SortOrder::Desc => b.date_raw.cmp(&a.date_raw),
        SortOrder::Asc => a.date_raw.cmp(&b.date_raw),
    });
}
