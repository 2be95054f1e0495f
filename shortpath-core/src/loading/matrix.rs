//! Adjacency matrix text format.
//!
//! ```text
//! 4
//! 0 1 4 0
//! 0 0 2 6
//! 0 0 0 3
//! 0 0 0 0
//! 0 3
//! ```
//!
//! The first line holds the vertex count `n`, followed by `n` rows of `n`
//! weights where a non-zero entry in row `i`, column `j` is the edge `i -> j`.
//! The last line names the source and destination vertices. Blank lines are
//! skipped.

use std::io::BufRead;

use itertools::Itertools;
use log::debug;

use super::ProblemInstance;
use crate::{Error, Graph, VertexId, Weight};

/// Non-blank lines paired with their 1-based line numbers
struct Lines<R> {
    inner: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, String), Error> {
        loop {
            let line = self.inner.next().transpose()?;
            self.line_number += 1;
            match line {
                Some(line) if line.trim().is_empty() => {}
                Some(line) => return Ok((self.line_number, line)),
                None => {
                    return Err(Error::Parse {
                        line: self.line_number,
                        message: format!("unexpected end of input, expected {expected}"),
                    });
                }
            }
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize, what: &str) -> Result<T, Error> {
    field.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {what} '{field}'"),
    })
}

/// Parses an adjacency matrix problem from `reader`.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed input and
/// [`Error::VertexOutOfRange`] if the source or destination is not a vertex.
pub fn parse_problem<R: BufRead>(reader: R) -> Result<ProblemInstance, Error> {
    let mut lines = Lines::new(reader);

    let (line, header) = lines.next_line("the vertex count")?;
    let vertex_count: usize = parse_field(header.trim(), line, "vertex count")?;
    // The graph is only allocated once every row has been read
    let mut rows: Vec<Vec<Weight>> = Vec::new();
    for from in 0..vertex_count {
        let (line, row) = lines.next_line(&format!("matrix row {from}"))?;
        let weights = row
            .split_whitespace()
            .map(|field| parse_field::<Weight>(field, line, "edge weight"))
            .collect::<Result<Vec<_>, _>>()?;

        if weights.len() != vertex_count {
            return Err(Error::Parse {
                line,
                message: format!(
                    "matrix row {from} has {} entries, expected {vertex_count}",
                    weights.len()
                ),
            });
        }
        rows.push(weights);
    }

    let mut graph = Graph::new(vertex_count);
    for (from, weights) in rows.into_iter().enumerate() {
        for (to, weight) in weights.into_iter().enumerate() {
            if weight != 0 {
                graph.add_edge(from, to, weight)?;
            }
        }
    }

    let (line, endpoints) = lines.next_line("the source and destination")?;
    let (source, destination) = endpoints
        .split_whitespace()
        .collect_tuple::<(&str, &str)>()
        .ok_or_else(|| Error::Parse {
            line,
            message: "expected exactly two vertex indices".to_string(),
        })?;
    let source: VertexId = parse_field(source, line, "source vertex")?;
    let destination: VertexId = parse_field(destination, line, "destination vertex")?;

    graph.validate_vertex(source)?;
    graph.validate_vertex(destination)?;

    debug!(
        "Parsed {vertex_count}x{vertex_count} matrix with {} edges",
        graph.edge_count()
    );

    Ok(ProblemInstance {
        graph,
        source,
        destination,
    })
}
