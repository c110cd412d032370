// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

/// A problem detected while building or running a pattern.
///
/// Errors are never returned from the builder methods. Instead they are
/// published to the registered listeners and recorded in the builder's
/// error log, and the operation carries on with a safe result.
#[derive(Debug, PartialEq, Clone)]
pub enum BuilderError {
    // A method received a numeric argument or a group name it cannot accept.
    // The pattern is left unchanged.
    InvalidArgument(String),

    // The engine rejected the accumulated pattern at build time.
    InvalidPattern(String),

    // The engine failed while matching, e.g. the backtrack limit was exceeded.
    MatchFailed(String),
}

impl BuilderError {
    pub fn message(&self) -> &str {
        match self {
            BuilderError::InvalidArgument(msg) => msg,
            BuilderError::InvalidPattern(msg) => msg,
            BuilderError::MatchFailed(msg) => msg,
        }
    }
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BuilderError::InvalidPattern(msg) => f.write_str(msg),
            BuilderError::MatchFailed(msg) => write!(f, "Match failed: {}", msg),
        }
    }
}

impl std::error::Error for BuilderError {}
