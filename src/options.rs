// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::RegexBuilder;

/// Limits passed to the engine when a pattern is compiled.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EngineOptions {
    // Maximum number of backtracking steps of a single search.
    pub backtrack_limit: usize,

    // Size limits of the compiled program the engine delegates
    // plain (non-fancy) sub-expressions to.
    pub delegate_size_limit: Option<usize>,
    pub delegate_dfa_size_limit: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            backtrack_limit: 1_000_000,
            delegate_size_limit: None,
            delegate_dfa_size_limit: None,
        }
    }
}

impl EngineOptions {
    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    pub fn delegate_size_limit(mut self, limit: usize) -> Self {
        self.delegate_size_limit = Some(limit);
        self
    }

    pub fn delegate_dfa_size_limit(mut self, limit: usize) -> Self {
        self.delegate_dfa_size_limit = Some(limit);
        self
    }

    pub(crate) fn to_engine_builder(self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder.backtrack_limit(self.backtrack_limit);

        if let Some(limit) = self.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }

        if let Some(limit) = self.delegate_dfa_size_limit {
            builder.delegate_dfa_size_limit(limit);
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::EngineOptions;

    #[test]
    fn test_options() {
        let options = EngineOptions::default();
        assert_eq!(options.backtrack_limit, 1_000_000);
        assert_eq!(options.delegate_size_limit, None);

        let options = EngineOptions::default()
            .backtrack_limit(10)
            .delegate_size_limit(1 << 20)
            .delegate_dfa_size_limit(1 << 16);
        assert_eq!(
            options,
            EngineOptions {
                backtrack_limit: 10,
                delegate_size_limit: Some(1 << 20),
                delegate_dfa_size_limit: Some(1 << 16),
            }
        );

        let re = options.to_engine_builder("a+b").build().unwrap();
        assert!(re.is_match("aab").unwrap());
    }
}
