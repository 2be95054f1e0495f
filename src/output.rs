use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use shortpath_core::{Algorithm, PathResult, VertexId};

/// Result of one search run, as reported to the user
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub source: VertexId,
    pub destination: VertexId,
    pub result: PathResult,
    #[serde(rename = "elapsed_ms")]
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

pub fn write_text(out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
    match &report.result {
        PathResult::Found { weight, path } => {
            writeln!(
                out,
                "Shortest distance from vertex {} to vertex {} is {weight}",
                report.source, report.destination
            )?;
            let vertices: Vec<String> = path.iter().map(ToString::to_string).collect();
            writeln!(out, "Shortest path: {}", vertices.join(" "))?;
        }
        PathResult::NoPath => writeln!(out, "No path exists")?,
    }
    writeln!(out, "Elapsed time: {} milliseconds", report.elapsed.as_millis())
}

pub fn write_json(out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)
}
