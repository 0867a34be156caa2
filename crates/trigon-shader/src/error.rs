use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to obtain the text of a shader-source file.
///
/// Only I/O is reported here. Shader syntax is never checked by the splitter;
/// compile errors surface from the GPU layer.
#[derive(Debug)]
pub enum ShaderSourceError {
    /// The file could not be opened (missing, permissions, is a directory...).
    Open { path: PathBuf, source: io::Error },
    /// The file was opened but reading its contents failed.
    Read { path: PathBuf, source: io::Error },
}

impl ShaderSourceError {
    /// Path of the resource that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source.kind(),
        }
    }
}

impl fmt::Display for ShaderSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => {
                write!(f, "failed to open shader source {}", path.display())
            }
            Self::Read { path, .. } => {
                write!(f, "failed to read shader source {}", path.display())
            }
        }
    }
}

impl std::error::Error for ShaderSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}
