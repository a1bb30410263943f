use std::path::PathBuf;

use gosynth_syntax::PrintError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for gosynth operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("error opening {file} file")]
    #[diagnostic(
        code(gosynth::open),
        help("make sure the output directory exists and is writable")
    )]
    Open {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error printing {file} file")]
    #[diagnostic(code(gosynth::print))]
    Print {
        file: String,
        #[source]
        source: PrintError,
    },

    #[error("error writing {file} file")]
    #[diagnostic(code(gosynth::write))]
    Write {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("var declaration contains a non value spec ({found})")]
    #[diagnostic(
        code(gosynth::malformed_var_decl),
        help("build var declarations from `ValueSpec`s only")
    )]
    MalformedVarDecl { found: &'static str },
}

impl Error {
    /// Name of the file the error refers to, for export errors.
    pub fn file(&self) -> Option<&str> {
        match self {
            Error::Open { file, .. } | Error::Print { file, .. } | Error::Write { file, .. } => {
                Some(file.as_str())
            }
            Error::MalformedVarDecl { .. } => None,
        }
    }
}
