pub mod options;
pub mod schedule;

pub use options::ConvertOptions;
pub use schedule::{Course, Department, MINUTES_PER_BLOCK, Note, Period, Schedule, Section};
