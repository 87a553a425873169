use std::path::PathBuf;

#[derive(Debug)]
/// Represents all errors that can occur while feeding files to the evaluator.
pub enum IoError {
    /// An input file could not be read.
    ReadInput {
        /// The file that was being read.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// A result file could not be written.
    WriteOutput {
        /// The file that was being written.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The output directory could not be created.
    CreateDir {
        /// The directory that was being created.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The input directory could not be listed.
    ReadDir {
        /// The directory that was being listed.
        path:   PathBuf,
        /// The underlying traversal failure.
        source: walkdir::Error,
    },
    /// Neither an input file nor an input directory was given.
    NoInput,
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadInput { path, source } => {
                write!(f, "Cannot read {}: {source}", path.display())
            },
            Self::WriteOutput { path, source } => {
                write!(f, "Cannot write {}: {source}", path.display())
            },
            Self::CreateDir { path, source } => {
                write!(f, "Cannot create directory {}: {source}", path.display())
            },
            Self::ReadDir { path, source } => {
                write!(f, "Cannot list directory {}: {source}", path.display())
            },
            Self::NoInput => write!(f, "No input given. Pass an input file or --dir <DIR>."),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadInput { source, .. }
            | Self::WriteOutput { source, .. }
            | Self::CreateDir { source, .. } => Some(source),
            Self::ReadDir { source, .. } => Some(source),
            Self::NoInput => None,
        }
    }
}
