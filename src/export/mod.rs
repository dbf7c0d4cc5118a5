//! Export of per-game timing data
//!
//! The decision timeline is written as CSV for an external charting tool.

mod timeline_csv;

pub use timeline_csv::{TimelineCsvExporter, TimelineRecord};
