//! Catalog to schedule database transformation.
//!
//! This crate turns a flat course catalog into the nested schedb tree:
//!
//! - **normalization**: pure code normalizers (types, grading, days, times)
//! - **period** / **section**: per-record builders
//! - **schedule**: the top-level driver that groups courses by department
//! - **generated**: resolution of the `generated` timestamp
//! - **summary**: per-department record counts

pub mod error;
pub mod generated;
pub mod normalization;
pub mod period;
pub mod schedule;
pub mod section;
pub mod summary;

mod fields;

pub use error::ConvertError;
pub use generated::{GENERATED_FORMAT, format_generated, resolve_generated};
pub use period::build_period;
pub use schedule::{CATALOG_ROOT, build_schedule, build_schedule_at};
pub use section::build_section;
pub use summary::{DepartmentSummary, ScheduleSummary};
