// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for timestamp and duration formatting

use thiserror::Error;

/// Errors that can occur while normalizing, formatting, or humanizing times
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("invalid ISO 8601 timestamp: {0:?}")]
    Parse(String),
    #[error("time out of range: {0}")]
    OutOfRange(String),
}
