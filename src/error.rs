// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Error types for the analysis core.

use thiserror::Error;

/// Errors from the analysis engines and the record boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller precondition was violated: cement class outside {R, N, S},
    /// test age outside the 1-28 day curve domain, a non-finite strength
    /// input, or a sample set that is not exactly three values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The record boundary received JSON it could not parse.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}
