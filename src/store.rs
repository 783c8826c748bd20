// File: src/store.rs
use crate::model::filter;
use crate::model::{FilterCatalog, FilterState, Procedure};
use std::collections::HashMap;

/// Owns the loaded procedures and the filter catalog derived from them.
///
/// The backing vector keeps snapshot order for its whole lifetime: filtering
/// and sorting operate on a copy, so procedures hidden by a filter keep
/// their position and reappear exactly where they were.
#[derive(Debug, Clone, Default)]
pub struct ProcedureStore {
    procedures: Vec<Procedure>,
    catalog: FilterCatalog,
}

impl ProcedureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection and derives the filter catalog from it.
    /// The catalog is computed here, once, and stays fixed until the next
    /// load; toggling filters never adds or removes options.
    pub fn load(
        &mut self,
        procedures: Vec<Procedure>,
        subject_overrides: &HashMap<String, String>,
    ) {
        self.catalog = FilterCatalog::build(&procedures, subject_overrides);
        self.procedures = procedures;
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    pub fn all(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    /// The full synchronous pass: keep what the filters accept, then order
    /// by event date. Runs on every filter change.
    pub fn visible(&self, filters: &FilterState) -> Vec<Procedure> {
        let mut visible: Vec<Procedure> = self
            .procedures
            .iter()
            .filter(|p| filters.matches(p))
            .cloned()
            .collect();
        filter::sort_procedures(&mut visible, filters.order);
        visible
    }
}
