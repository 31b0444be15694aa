#![deny(missing_docs)]

//! I/O layer shared by the SCM sampler binaries: facet-list and sequence-file
//! readers, the sample writer, and clock seeding.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use scm_complex::{sanitize_facets, Complex, FacetSet, LabelMap};
use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::VertexId;

/// Facet list loaded from disk, ready to build a complex.
#[derive(Debug, Clone)]
pub struct FacetListInput {
    /// Maximal facets with dense vertex ids.
    pub facets: Vec<FacetSet>,
    /// Label map built in labeled mode; `None` for cleansed integer input.
    pub labels: Option<LabelMap>,
    /// Cardinality of the largest facet.
    pub largest_facet: usize,
}

/// Reads a facet list: one facet per line, vertices whitespace-separated,
/// empty lines skipped.
///
/// In the default labeled mode, tokens are arbitrary labels interned to
/// contiguous ids in first-appearance order and the list is sanitized down
/// to its maximal facets. With `cleansed` set, tokens must already be dense
/// nonnegative integers and the list is taken as-is.
pub fn read_facet_list<R: BufRead>(reader: R, cleansed: bool) -> Result<FacetListInput, ScmError> {
    let mut raw: Vec<FacetSet> = Vec::new();
    let mut labels = LabelMap::new();
    let mut largest_facet = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| read_error("facet-list-read", line_no, err))?;
        let mut facet = FacetSet::new();
        for token in line.split_whitespace() {
            let vertex = if cleansed {
                let raw_id: u64 = token.parse().map_err(|_| {
                    ScmError::Input(
                        ErrorInfo::new("malformed-vertex", "cleansed input requires integer ids")
                            .with_context("line", (line_no + 1).to_string())
                            .with_context("token", token),
                    )
                })?;
                VertexId::from_raw(raw_id)
            } else {
                labels.intern(token)
            };
            facet.insert(vertex);
        }
        if facet.is_empty() {
            continue;
        }
        largest_facet = largest_facet.max(facet.len());
        raw.push(facet);
    }
    if cleansed {
        Ok(FacetListInput {
            facets: raw,
            labels: None,
            largest_facet,
        })
    } else {
        let sanitized = sanitize_facets(raw);
        Ok(FacetListInput {
            facets: sanitized.facets,
            labels: Some(labels),
            largest_facet: sanitized.largest_facet,
        })
    }
}

/// Reads a sequence file: whitespace-separated nonnegative integers.
pub fn read_sequence<R: BufRead>(mut reader: R) -> Result<Vec<usize>, ScmError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|err| ScmError::Input(ErrorInfo::new("sequence-read", err.to_string())))?;
    contents
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| {
                ScmError::Input(
                    ErrorInfo::new("malformed-sequence", "sequence entries must be integers")
                        .with_context("token", token),
                )
            })
        })
        .collect()
}

/// Opens and reads a facet list from `path`.
pub fn load_facet_list(path: &Path, cleansed: bool) -> Result<FacetListInput, ScmError> {
    read_facet_list(open_input(path)?, cleansed)
}

/// Opens and reads a sequence file from `path`.
pub fn load_sequence(path: &Path) -> Result<Vec<usize>, ScmError> {
    read_sequence(open_input(path)?)
}

/// Writes one line per facet, vertices separated by single spaces.
///
/// With a label map, vertices print as their external labels; otherwise as
/// raw integer ids.
pub fn write_facets<W: Write>(
    out: &mut W,
    complex: &Complex,
    labels: Option<&LabelMap>,
) -> io::Result<()> {
    for facet in complex.facet_ids() {
        let mut line = String::new();
        for &vertex in complex.facet_neighbors(facet) {
            if !line.is_empty() {
                line.push(' ');
            }
            match labels.and_then(|map| map.label(vertex)) {
                Some(label) => line.push_str(label),
                None => line.push_str(&vertex.as_raw().to_string()),
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Wraps a sample write failure into the canonical error type.
pub fn sample_write_error(err: io::Error) -> ScmError {
    ScmError::Io(ErrorInfo::new("sample-write", err.to_string()))
}

/// Derives a seed from the wall clock, for runs without an explicit seed.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn open_input(path: &Path) -> Result<BufReader<File>, ScmError> {
    let file = File::open(path).map_err(|err| {
        ScmError::Input(
            ErrorInfo::new("cannot-open", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    Ok(BufReader::new(file))
}

fn read_error(code: &str, line_no: usize, err: io::Error) -> ScmError {
    ScmError::Input(
        ErrorInfo::new(code, err.to_string()).with_context("line", (line_no + 1).to_string()),
    )
}
