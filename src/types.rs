/// A TCP port number
pub type Port = u16;

/// One listening socket owned by one process
///
/// Identity fields stay textual for compatibility with different platforms,
/// which format process and user ids in different ways.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessRecord {
    /// The process ID as reported by the tool
    pub pid: String,
    /// The command name, truncated or abbreviated as reported
    pub command: String,
    /// The owning user, numeric id or name depending on the platform
    pub user_id: String,
    /// The port the process is listening on, if one could be recovered
    pub port_number: Option<Port>,
}

/// The type of an open file in the tagged listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    /// A directory
    Dir,
    /// A regular file
    Reg,
    /// Any type code this crate does not map
    #[default]
    Unknown,
}

impl FileType {
    /// Map an lsof type code such as `DIR` or `REG` to a known file type
    pub fn from_code(code: &str) -> Self {
        match code {
            "DIR" => FileType::Dir,
            "REG" => FileType::Reg,
            _ => FileType::Unknown,
        }
    }
}

/// An open file in use by a process, from the tagged listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDescriptor {
    /// The file descriptor as reported, e.g. `5u`
    pub fd: String,
    /// The type of the file
    pub file_type: FileType,
    /// The file or socket name
    pub name: String,
}

/// Which lsof output layout to request and parse
///
/// The invocation arguments and the parser are selected together, so a query
/// can never parse one layout while having asked the tool for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One whitespace-delimited line per socket
    #[default]
    Compact,
    /// Field-tagged output, one tag character per line, carrying per-process
    /// open file detail
    Tagged,
}

impl OutputFormat {
    /// The lsof arguments requesting this layout: numeric hosts and ports,
    /// restricted to sockets in the listening state.
    pub(crate) fn args(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::Compact => &["-i", "-n", "-P", "-sTCP:LISTEN"],
            OutputFormat::Tagged => &["-F", "pcufn", "-i", "-n", "-P", "-sTCP:LISTEN"],
        }
    }
}
