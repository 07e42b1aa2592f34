use crate::error::{LportsError, LportsResult};
use crate::types::{FileDescriptor, OutputFormat, ProcessRecord};
use crate::{invoke, parse};

/// Find the processes holding listening TCP sockets on this host
///
/// ```no_run
/// use lports::ListenerQuery;
///
/// let records = ListenerQuery::new().execute().unwrap();
/// ```
#[derive(Debug)]
pub struct ListenerQuery {
    command: String,
    format: OutputFormat,
}

impl ListenerQuery {
    /// Create a new query against the system `lsof`
    pub fn new() -> Self {
        ListenerQuery {
            command: invoke::LSOF.to_string(),
            format: OutputFormat::Compact,
        }
    }

    /// Select the output layout to request and parse
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the command to invoke instead of `lsof`
    ///
    /// Mostly useful for pointing the query at a stand-in binary in tests.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Execute the query, returning one record per listening socket
    ///
    /// Zero records means no listeners were found, not a failure.
    pub fn execute(&self) -> LportsResult<Vec<ProcessRecord>> {
        let raw = invoke::capture(&self.command, self.format.args())?;
        Ok(parse::parse(&raw, self.format))
    }

    /// Execute the query, also returning the open files reported per process
    ///
    /// Only the tagged layout carries file detail, so the query must have
    /// been configured with [`OutputFormat::Tagged`].
    pub fn execute_with_files(&self) -> LportsResult<Vec<(ProcessRecord, Vec<FileDescriptor>)>> {
        if self.format != OutputFormat::Tagged {
            return Err(LportsError::ConfigurationError(
                "file detail requires the tagged output format".to_string(),
            ));
        }
        let raw = invoke::capture(&self.command, self.format.args())?;
        Ok(parse::parse_with_files(&raw))
    }
}

impl Default for ListenerQuery {
    fn default() -> Self {
        ListenerQuery::new()
    }
}
