// File: ./src/model/mod.rs
pub mod adapter;
pub mod dates;
pub mod display;
pub mod filter;
pub mod item;
pub mod subjects;

pub use adapter::RawProcedure;
pub use filter::{FilterCatalog, FilterGroup, FilterOption, FilterState, SortOrder};
pub use item::{Procedure, ProcedureStatus};
