// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

/// One match found by `PatternBuilder::execute`, together with
/// the text of all its capture groups.
///
/// Index 0 is the whole match, the following indices are the capture
/// groups numbered by the position of their opening parenthesis.
/// A group that did not take part in the match is `None`.
#[derive(Debug, PartialEq, Clone)]
pub struct Captures<'t> {
    pub matches: Vec<Option<Match<'t>>>,
}

impl<'t> Captures<'t> {
    pub(crate) fn from_engine(
        captures: &fancy_regex::Captures<'t>,
        names: &[Option<String>],
    ) -> Self {
        let matches = (0..captures.len())
            .map(|idx| {
                captures.get(idx).map(|m| {
                    let name = names.get(idx).cloned().flatten();
                    Match::new(m.start(), m.end(), name, m.as_str())
                })
            })
            .collect();

        Captures { matches }
    }

    /// The whole match.
    pub fn first(&self) -> Option<&Match<'t>> {
        self.get(0)
    }

    // the following methods are intended to
    // be compatible with the 'Captures' API of crate 'regex':
    // https://docs.rs/regex/latest/regex/struct.Captures.html

    pub fn get(&self, index: usize) -> Option<&Match<'t>> {
        self.matches.get(index).and_then(|item| item.as_ref())
    }

    pub fn name(&self, name: &str) -> Option<&Match<'t>> {
        self.matches
            .iter()
            .flatten()
            .find(|item| item.name.as_deref() == Some(name))
    }

    // e.g.
    //
    // ```
    //   let c = &builder.execute("...")[0];
    //   let (whole, [one, two, three]) = c.extract();
    // ```
    //
    // groups that did not participate yield an empty string.
    pub fn extract<const N: usize>(&self) -> (&'t str, [&'t str; N]) {
        let value_of = |idx: usize| self.get(idx).map_or("", |m| m.value);

        let mut ss: [&str; N] = [""; N];
        for (idx, s) in ss.iter_mut().enumerate() {
            *s = value_of(idx + 1);
        }
        (value_of(0), ss)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Match<'t> {
    pub start: usize, // position included
    pub end: usize,   // position excluded
    pub name: Option<String>,
    pub value: &'t str,
}

impl<'t> Match<'t> {
    pub fn new(start: usize, end: usize, name: Option<String>, value: &'t str) -> Self {
        Match {
            start,
            end,
            name,
            value,
        }
    }

    // the following methods are intended to
    // be compatible with the 'Match' API of crate 'regex':
    // https://docs.rs/regex/latest/regex/struct.Match.html

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &'t str {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Captures, Match};

    fn new_captures<'t>(
        gs: &[Option<(
            /*start:*/ usize,
            /*end:*/ usize,
            /*name:*/ Option<&str>,
            /*value:*/ &'t str,
        )>],
    ) -> Captures<'t> {
        let matches = gs
            .iter()
            .map(|item| item.map(|g| Match::new(g.0, g.1, g.2.map(str::to_owned), g.3)))
            .collect();

        Captures { matches }
    }

    #[test]
    fn test_captures_access() {
        let c = new_captures(&[
            Some((0, 10, None, "2025-06-01")),
            Some((0, 4, Some("year"), "2025")),
            None,
            Some((8, 10, Some("day"), "01")),
        ]);

        assert_eq!(c.len(), 4);
        assert_eq!(c.first().unwrap().as_str(), "2025-06-01");
        assert_eq!(c.get(1).unwrap().range(), 0..4);
        assert_eq!(c.get(2), None);
        assert_eq!(c.get(9), None);

        assert_eq!(c.name("year").unwrap().as_str(), "2025");
        assert_eq!(c.name("day").unwrap().start(), 8);
        assert_eq!(c.name("month"), None);

        let (whole, [year, month, day]) = c.extract();
        assert_eq!(whole, "2025-06-01");
        assert_eq!(year, "2025");
        assert_eq!(month, "");
        assert_eq!(day, "01");
    }

    #[test]
    fn test_match() {
        let m = Match::new(3, 6, None, "abc");
        assert_eq!(m.start(), 3);
        assert_eq!(m.end(), 6);
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert_eq!(m.as_str(), "abc");

        let m = Match::new(2, 2, None, "");
        assert!(m.is_empty());
    }
}
