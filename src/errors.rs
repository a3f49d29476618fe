//! Error types with diagnostics using miette

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{NumericError, ParseColorError};

/// Everything that can go wrong while configuring or saving a logo.
///
/// Drawing itself never fails; only configuration and output do.
#[derive(Error, Diagnostic, Debug)]
pub enum LogoError {
    #[error("could not write {}", .path.display())]
    #[diagnostic(
        code(symlogo::io),
        help("check that the directory exists and is writable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML serialization error: {0}")]
    #[diagnostic(code(symlogo::serialize))]
    Serialize(String),

    #[error("invalid color")]
    #[diagnostic(
        code(symlogo::config::invalid_color),
        help("use #rgb, #rrggbb or a CSS color keyword")
    )]
    InvalidColor(#[from] ParseColorError),

    #[error("invalid {field}")]
    #[diagnostic(code(symlogo::config::invalid_value))]
    InvalidConfig {
        field: &'static str,
        #[source]
        source: NumericError,
    },
}
