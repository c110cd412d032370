// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod builder;
mod captures;
mod escape;
mod exec;
mod fragment;
mod notifier;
mod options;

pub mod error;
pub mod flags;

pub use builder::PatternBuilder;
pub use captures::{Captures, Match};
pub use error::BuilderError;
pub use escape::escape;
pub use flags::{Flag, Flags};
pub use notifier::ListenerId;
pub use options::EngineOptions;

// the matching engine, re-exported for `build()` results and closure replacers
pub use fancy_regex as engine;
pub use fancy_regex::{NoExpand, Regex, Replacer};
