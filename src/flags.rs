// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

/// A single-character matching flag.
///
/// The declaration order is the canonical rendering order,
/// i.e. "gimsu".
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Flag {
    Global,     // g
    IgnoreCase, // i
    Multiline,  // m
    DotAll,     // s
    Unicode,    // u
}

impl Flag {
    pub fn code(&self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::IgnoreCase => 'i',
            Flag::Multiline => 'm',
            Flag::DotAll => 's',
            Flag::Unicode => 'u',
        }
    }

    pub fn from_code(code: char) -> Option<Flag> {
        let flag = match code {
            'g' => Flag::Global,
            'i' => Flag::IgnoreCase,
            'm' => Flag::Multiline,
            's' => Flag::DotAll,
            'u' => Flag::Unicode,
            _ => return None,
        };
        Some(flag)
    }

    // The engine has no inline form for 'g' (it only decides between
    // "replace first" and "replace all") and 'u' (always on).
    fn inline_code(&self) -> Option<char> {
        match self {
            Flag::IgnoreCase | Flag::Multiline | Flag::DotAll => Some(self.code()),
            Flag::Global | Flag::Unicode => None,
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The set of active flags of a builder.
///
/// A default set contains the global flag only.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Flags {
    items: BTreeSet<Flag>,
}

impl Flags {
    pub fn empty() -> Self {
        Flags {
            items: BTreeSet::new(),
        }
    }

    /// Adds the flag, returns false if it was already present.
    pub fn insert(&mut self, flag: Flag) -> bool {
        self.items.insert(flag)
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.items.contains(&flag)
    }

    pub fn union(&self, other: &Flags) -> Flags {
        Flags {
            items: self.items.union(&other.items).copied().collect(),
        }
    }

    /// Iterates the flags in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The inline modifier group understood by the engine, e.g. `(?im)`,
    /// or an empty string when no flag has an inline form.
    pub fn to_inline_group(&self) -> String {
        let codes: String = self.iter().filter_map(|flag| flag.inline_code()).collect();
        if codes.is_empty() {
            String::new()
        } else {
            format!("(?{})", codes)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        let mut flags = Flags::empty();
        flags.insert(Flag::Global);
        flags
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag)?;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = String;

    /// Parses a flag string such as "gim". The order of the codes does not
    /// matter, unknown or repeated codes are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for code in s.chars() {
            let flag = Flag::from_code(code).ok_or_else(|| format!("Unknown flag '{}'.", code))?;
            if !flags.insert(flag) {
                return Err(format!("Duplicated flag '{}'.", code));
            }
        }
        Ok(flags)
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<T: IntoIterator<Item = Flag>>(iter: T) -> Self {
        Flags {
            items: iter.into_iter().collect(),
        }
    }
}
