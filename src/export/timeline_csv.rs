//! CSV export of AI decision times

use std::{fs::File, io::Write, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, instrumentation::Timeline};

/// A single row of the timeline CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRecord {
    /// AI decision number, starting at 1
    #[serde(rename = "move")]
    pub move_number: usize,
    pub duration_s: f64,
    pub cumulative_s: f64,
}

/// Exporter for timeline CSV files
pub struct TimelineCsvExporter;

impl TimelineCsvExporter {
    /// One record per recorded decision, with running totals
    pub fn records(timeline: &Timeline) -> Vec<TimelineRecord> {
        timeline
            .durations()
            .iter()
            .zip(timeline.cumulative_secs())
            .enumerate()
            .map(|(i, (duration, cumulative_s))| TimelineRecord {
                move_number: i + 1,
                duration_s: duration.as_secs_f64(),
                cumulative_s,
            })
            .collect()
    }

    /// Write the timeline as CSV with a header row
    pub fn write<W: Write>(timeline: &Timeline, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in Self::records(timeline) {
            csv.serialize(record)?;
        }
        csv.flush().map_err(|source| Error::Io {
            operation: "flush timeline CSV".to_string(),
            source,
        })?;
        Ok(())
    }

    /// Write the timeline to a file at `path`
    pub fn export<P: AsRef<Path>>(timeline: &Timeline, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        Self::write(timeline, file)?;
        log::debug!("wrote {} timeline rows to {}", timeline.len(), path.display());
        Ok(timeline.len())
    }
}
