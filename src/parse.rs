use crate::error::{LportsError, LportsResult};
use crate::types::{FileDescriptor, FileType, OutputFormat, Port, ProcessRecord};
use once_cell::sync::OnceCell;
use regex::Regex;

// Column contract for the compact listing:
// COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
const COL_COMMAND: usize = 0;
const COL_PID: usize = 1;
const COL_USER: usize = 2;
const COL_NAME: usize = 8;

/// Marker distinguishing listening sockets from other socket states.
const STATE_MARKER: &str = "LISTEN";

fn digits() -> &'static Regex {
    static DIGITS: OnceCell<Regex> = OnceCell::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// What one raw line of the compact listing amounted to.
enum LineOutcome {
    /// A fully parsed record
    Record(ProcessRecord),
    /// Nothing of interest, contributes no record
    Skip,
}

/// Parse captured tool output into one record per listening socket.
///
/// Records come out in the same order as their source lines. A line or chunk
/// the parser cannot make sense of is dropped individually rather than
/// failing the whole capture, so zero records is a valid result.
pub(crate) fn parse(text: &str, format: OutputFormat) -> Vec<ProcessRecord> {
    match format {
        OutputFormat::Compact => parse_compact(text),
        OutputFormat::Tagged => parse_with_files(text)
            .into_iter()
            .map(|(record, _)| record)
            .collect(),
    }
}

fn parse_compact(text: &str) -> Vec<ProcessRecord> {
    // The first line is the column header, never a record.
    text.lines()
        .skip(1)
        .map(classify)
        .filter_map(|outcome| match outcome {
            LineOutcome::Record(record) => Some(record),
            LineOutcome::Skip => None,
        })
        .collect()
}

fn classify(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() || !line.contains(STATE_MARKER) {
        return LineOutcome::Skip;
    }
    match fill_positional(line) {
        Ok(record) => LineOutcome::Record(record),
        Err(e) => {
            log::warn!("dropping unparseable line {line:?}: {e}");
            LineOutcome::Skip
        }
    }
}

/// Map the whitespace-delimited fields of one socket line into a record.
///
/// The port is recovered from the first run of digits in the NAME column. A
/// line too short to carry that column, or whose NAME column holds no digits,
/// still yields a record with the port unset.
fn fill_positional(line: &str) -> LportsResult<ProcessRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (command, pid, user_id) = match (
        fields.get(COL_COMMAND),
        fields.get(COL_PID),
        fields.get(COL_USER),
    ) {
        (Some(command), Some(pid), Some(user_id)) => (*command, *pid, *user_id),
        _ => return Err(LportsError::EmptyField),
    };

    Ok(ProcessRecord {
        pid: pid.to_string(),
        command: command.to_string(),
        user_id: user_id.to_string(),
        port_number: fields.get(COL_NAME).and_then(|name| extract_port(name)),
    })
}

/// The first maximal run of decimal digits in a mixed field, e.g. `*:8080`
/// or `123u`.
fn extract_port(field: &str) -> Option<Port> {
    digits().find(field).and_then(|m| m.as_str().parse().ok())
}

/// Parse the tagged listing, keeping the open file detail per process.
pub(crate) fn parse_with_files(text: &str) -> Vec<(ProcessRecord, Vec<FileDescriptor>)> {
    let mut processes = Vec::new();
    let mut chunk: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // A process line closes out the chunk before it.
        if line.starts_with('p') && !chunk.is_empty() {
            flush_chunk(&mut processes, &mut chunk);
        }
        chunk.push(line);
    }
    flush_chunk(&mut processes, &mut chunk);
    processes
}

fn flush_chunk(processes: &mut Vec<(ProcessRecord, Vec<FileDescriptor>)>, chunk: &mut Vec<&str>) {
    if chunk.is_empty() {
        return;
    }
    match fill_tagged(chunk) {
        Ok(parsed) => processes.push(parsed),
        Err(e) => log::warn!("dropping unparseable chunk {chunk:?}: {e}"),
    }
    chunk.clear();
}

/// Fold one chunk of tagged lines into a record plus its file descriptors.
///
/// Within a chunk the last value seen for a field wins; the port is set from
/// any `n` value whose digits parse. Tags this crate does not track are
/// skipped.
fn fill_tagged(chunk: &[&str]) -> LportsResult<(ProcessRecord, Vec<FileDescriptor>)> {
    if chunk.is_empty() {
        return Err(LportsError::EmptyField);
    }

    let mut record = ProcessRecord::default();
    let mut files: Vec<FileDescriptor> = Vec::new();
    for line in chunk {
        let mut chars = line.chars();
        let tag = match chars.next() {
            Some(tag) => tag,
            None => return Err(LportsError::EmptyField),
        };
        let value = chars.as_str();
        match tag {
            'p' => record.pid = value.to_string(),
            'c' => record.command = value.to_string(),
            'u' => record.user_id = value.to_string(),
            'f' => files.push(FileDescriptor {
                fd: value.to_string(),
                file_type: FileType::Unknown,
                name: String::new(),
            }),
            't' => {
                if let Some(file) = files.last_mut() {
                    file.file_type = FileType::from_code(value);
                }
            }
            'n' => {
                if let Some(port) = extract_port(value) {
                    record.port_number = Some(port);
                }
                if let Some(file) = files.last_mut() {
                    file.name = value.to_string();
                }
            }
            _ => {}
        }
    }

    // A chunk that never named its process cannot satisfy the record
    // identity, matching the short-line handling of the compact layout.
    if record.pid.is_empty() || record.command.is_empty() {
        return Err(LportsError::EmptyField);
    }

    Ok((record, files))
}
