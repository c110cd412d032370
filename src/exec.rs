// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::sync::LazyLock;

use fancy_regex::{Regex, Replacer};
use log::{debug, trace};

use crate::{builder::PatternBuilder, captures::Captures, error::BuilderError, flags::Flag};

// Word boundary and non-word boundary at the same position,
// this expression can never match.
static MATCH_NOTHING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\B").unwrap());

impl PatternBuilder {
    /// Compiles the accumulated pattern and flags.
    ///
    /// When the engine rejects the pattern the failure is reported and an
    /// expression that matches nothing is returned instead.
    pub fn build(&mut self) -> Regex {
        let source = format!("{}{}", self.flags.to_inline_group(), self.pattern);
        debug!("compile pattern: {}", source);

        match self.options.to_engine_builder(&source).build() {
            Ok(regex) => regex,
            Err(e) => {
                self.report(BuilderError::InvalidPattern(format!(
                    "Invalid regular expression: {}",
                    e
                )));
                MATCH_NOTHING.clone()
            }
        }
    }

    /// Checks whether the pattern matches anywhere in `input`.
    pub fn test(&mut self, input: &str) -> bool {
        let regex = self.build();
        match regex.is_match(input) {
            Ok(found) => found,
            Err(e) => {
                self.report(BuilderError::MatchFailed(e.to_string()));
                false
            }
        }
    }

    /// Collects the successive matches in `input`, at most `result_cap`
    /// of them when a cap was set with `run_times`.
    ///
    /// Each search starts where the previous match ended, and one
    /// character further when that match was empty, so the iteration
    /// always terminates.
    pub fn execute<'t>(&mut self, input: &'t str) -> Vec<Captures<'t>> {
        let regex = self.build();
        let names: Vec<Option<String>> = regex
            .capture_names()
            .map(|name| name.map(str::to_owned))
            .collect();

        let mut records = vec![];
        let mut position = 0;

        while position <= input.len() {
            if self.result_cap.is_some_and(|cap| records.len() >= cap) {
                break;
            }

            let captures = match regex.captures_from_pos(input, position) {
                Ok(Some(captures)) => captures,
                Ok(None) => break,
                Err(e) => {
                    self.report(BuilderError::MatchFailed(e.to_string()));
                    break;
                }
            };

            let (start, end) = match captures.get(0) {
                Some(m) => (m.start(), m.end()),
                None => break,
            };

            trace!("match {}..{}", start, end);
            records.push(Captures::from_engine(&captures, &names));

            position = if end > start {
                end
            } else {
                next_char_position(input, end)
            };
        }

        records
    }

    /// Replaces the matches in `input`.
    ///
    /// All matches are replaced when the global flag is present (it always
    /// is for builders made through the public API), otherwise only the
    /// first one. `replacement` follows the engine's rules: a string in
    /// which `$1` and `${name}` refer to groups, `NoExpand` for verbatim
    /// text, or a closure receiving the engine's captures.
    pub fn replace<R: Replacer>(&mut self, input: &str, replacement: R) -> String {
        let regex = self.build();
        let limit = if self.flags.contains(Flag::Global) {
            0
        } else {
            1
        };

        match regex.try_replacen(input, limit, replacement) {
            Ok(text) => text.into_owned(),
            Err(e) => {
                self.report(BuilderError::MatchFailed(e.to_string()));
                input.to_owned()
            }
        }
    }
}

fn next_char_position(text: &str, position: usize) -> usize {
    let char_length = text[position..].chars().next().map_or(1, char::len_utf8);
    position + char_length
}
