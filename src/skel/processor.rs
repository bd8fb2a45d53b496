//! File processing API for skeleton word lists
//!
//! The driver reads input line by line, tracks the active stanza, strips
//! comments, and hands every surviving data line to the parser and renderer
//! in turn. Malformed lines are dropped and reported; only I/O and
//! configuration problems end a run.

use crate::skel::diagnostics::{Diagnostic, Severity};
use crate::skel::parser::parse_line;
use crate::skel::render::{render_line, Target};
use crate::skel::stanza::{StanzaTable, StanzaTableError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Stanza marker: one or more `=`, then the stanza name.
static STANZA_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^=+\s*(.*?)\s*$").unwrap());

/// What gets written per parsed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `.dix` entry fragments
    Dix,
    /// One JSON object per parsed line, for inspecting the parse
    Json,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "dix" => Ok(OutputFormat::Dix),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ProcessingError::UnknownFormat(format.to_string())),
        }
    }
}

/// Knobs for one processing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub target: Target,
    pub format: OutputFormat,
    /// Write `<!-- name -->` into the output when a stanza is entered
    pub annotate_stanzas: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        ProcessingOptions {
            target: Target::SourceMonodix,
            format: OutputFormat::Dix,
            annotate_stanzas: false,
        }
    }
}

/// Errors that end a processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    Io(String),
    UnknownTarget(String),
    UnknownFormat(String),
    OutputPath(String),
    StanzaTable(StanzaTableError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::UnknownTarget(target) => {
                write!(f, "target must be one of s, d, bi; got '{}'", target)
            }
            ProcessingError::UnknownFormat(format) => {
                write!(f, "format must be one of dix, json; got '{}'", format)
            }
            ProcessingError::OutputPath(msg) => write!(f, "{}", msg),
            ProcessingError::StanzaTable(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<StanzaTableError> for ProcessingError {
    fn from(err: StanzaTableError) -> Self {
        ProcessingError::StanzaTable(err)
    }
}

fn io_error(err: std::io::Error) -> ProcessingError {
    ProcessingError::Io(err.to_string())
}

/// What one pass did, and everything it had to say about the input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessingSummary {
    /// Lines read, counting blanks and comments
    pub lines: usize,
    /// Fragments (or JSON records) written
    pub entries: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessingSummary {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

fn stanza_name(line: &str) -> &str {
    STANZA_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Slice off a trailing comment. Must happen before parsing; `#` doubles as
/// the parser's end-of-line terminator.
fn strip_tail_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

/// Process one input stream, appending output fragments in line order.
///
/// Data lines before the first recognized stanza marker, and after an
/// unrecognized one, are skipped; the unrecognized name itself is the only
/// warning. Dropped lines never stop the pass.
pub fn process_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    table: &StanzaTable,
    options: &ProcessingOptions,
) -> Result<ProcessingSummary, ProcessingError> {
    let mut summary = ProcessingSummary::default();
    let mut active: Option<String> = None;

    for (index, read) in reader.lines().enumerate() {
        let raw = read.map_err(io_error)?;
        let line_num = index + 1;
        summary.lines += 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('=') {
            let name = stanza_name(line);
            match table.lookup(name) {
                Some(code) => {
                    active = Some(code.to_string());
                    if options.annotate_stanzas {
                        writeln!(writer, "<!-- {} -->", name).map_err(io_error)?;
                    }
                }
                None => {
                    active = None;
                    summary.diagnostics.push(Diagnostic::warning(
                        line_num,
                        format!("unknown stanza name: '{}'", name),
                    ));
                }
            }
            continue;
        }

        let Some(category) = active.as_deref() else {
            continue;
        };

        let data = strip_tail_comment(line);
        let parsed = match parse_line(data) {
            Ok(parsed) => parsed,
            Err(err) => {
                summary
                    .diagnostics
                    .push(Diagnostic::error(line_num, format!("{}: '{}'", err, data)));
                continue;
            }
        };

        if parsed.has_ambiguous_sides() {
            summary.diagnostics.push(Diagnostic::error(
                line_num,
                format!("source and destination are both sets: '{}'", data),
            ));
            continue;
        }

        let resolved = parsed.with_defaults();
        match options.format {
            OutputFormat::Dix => {
                for fragment in render_line(&resolved, options.target, category) {
                    writeln!(writer, "{}", fragment).map_err(io_error)?;
                    summary.entries += 1;
                }
            }
            OutputFormat::Json => {
                let record = serde_json::to_string(&resolved)
                    .map_err(|e| ProcessingError::Io(e.to_string()))?;
                writeln!(writer, "{}", record).map_err(io_error)?;
                summary.entries += 1;
            }
        }
    }

    Ok(summary)
}

/// Swap the input's extension for `.dix`. Refuses to clobber an input that
/// already carries it.
pub fn derive_output_path(input: &Path) -> Result<PathBuf, ProcessingError> {
    let mut output = input.to_path_buf();
    output.set_extension("dix");
    if output == input {
        return Err(ProcessingError::OutputPath(format!(
            "output would overwrite {}; pass an explicit output path",
            input.display()
        )));
    }
    Ok(output)
}

/// Process one file to its output path (explicit, or derived from the input
/// name). Returns the path actually written together with the summary.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    table: &StanzaTable,
    options: &ProcessingOptions,
) -> Result<(PathBuf, ProcessingSummary), ProcessingError> {
    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input)?,
    };

    let in_file = File::open(input)
        .map_err(|e| ProcessingError::Io(format!("{}: {}", input.display(), e)))?;
    let out_file = File::create(&out_path)
        .map_err(|e| ProcessingError::Io(format!("{}: {}", out_path.display(), e)))?;

    let mut writer = BufWriter::new(out_file);
    let summary = process_stream(BufReader::new(in_file), &mut writer, table, options)?;
    writer.flush().map_err(io_error)?;

    Ok((out_path, summary))
}
