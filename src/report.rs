//! Serialization of measurement records to tabular sinks.
//!
//! Records are written in sequence order, one row per record. The CSV
//! column set matches the analysis output consumed by downstream plotting
//! tools; JSON carries the same fields through serde.

use std::io::{self, Write};

use crate::analysis::Measurement;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Algorithm,Nodes (V),Edges (E),V+E,Time (ms)";

/// Writes the records as CSV.
///
/// A record without a timing value gets an empty `Time (ms)` field.
pub fn write_csv<W: Write>(mut writer: W, records: &[Measurement]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        write!(
            writer,
            "{},{},{},{},",
            record.algorithm, record.nodes, record.edges, record.size
        )?;
        match record.avg_time_ms {
            Some(ms) => writeln!(writer, "{ms:.6}")?,
            None => writeln!(writer)?,
        }
    }
    Ok(())
}

/// Writes the records as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, records: &[Measurement]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, records)
}
