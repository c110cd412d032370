// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnchorAssertionName {
    Start,
    End,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BoundaryAssertionName {
    IsBound,
    IsNotBound,
}

#[allow(clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PresetCharSetName {
    CharWord,
    CharNotWord,
    CharDigit,
    CharNotDigit,
    CharSpace,
    CharNotSpace,
}

// 'special char' currently contains only the 'char_any'.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SpecialCharName {
    CharAny,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Quantifier {
    Optional,
    OneOrMore,
    ZeroOrMore,
    Repeat(usize),
    RepeatRange(usize, usize),
    AtLeast(usize),
}

/// The wrapping a group puts around the fragment of a child builder.
#[derive(Debug, PartialEq, Clone)]
pub enum GroupKind {
    Capture,
    NamedCapture(String),
    NonCapturing,

    // Assertions
    IsBefore,    // lookahead
    IsNotBefore, // negative lookahead
    IsAfter,     // lookbehind
    IsNotAfter,  // negative lookbehind
}

impl GroupKind {
    pub fn wrap(&self, inner: &str) -> String {
        match self {
            GroupKind::Capture => format!("({})", inner),
            GroupKind::NamedCapture(name) => format!("(?<{}>{})", name, inner),
            GroupKind::NonCapturing => format!("(?:{})", inner),
            GroupKind::IsBefore => format!("(?={})", inner),
            GroupKind::IsNotBefore => format!("(?!{})", inner),
            GroupKind::IsAfter => format!("(?<={})", inner),
            GroupKind::IsNotAfter => format!("(?<!{})", inner),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum BackReference {
    Index(usize),
    Name(String),
}

impl Display for AnchorAssertionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AnchorAssertionName::Start => "^",
            AnchorAssertionName::End => "$",
        };
        f.write_str(text)
    }
}

impl Display for BoundaryAssertionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BoundaryAssertionName::IsBound => r"\b",
            BoundaryAssertionName::IsNotBound => r"\B",
        };
        f.write_str(text)
    }
}

impl Display for PresetCharSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PresetCharSetName::CharWord => r"\w",
            PresetCharSetName::CharNotWord => r"\W",
            PresetCharSetName::CharDigit => r"\d",
            PresetCharSetName::CharNotDigit => r"\D",
            PresetCharSetName::CharSpace => r"\s",
            PresetCharSetName::CharNotSpace => r"\S",
        };
        f.write_str(text)
    }
}

impl Display for SpecialCharName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialCharName::CharAny => f.write_str("."),
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Optional => f.write_str("?"),
            Quantifier::OneOrMore => f.write_str("+"),
            Quantifier::ZeroOrMore => f.write_str("*"),
            Quantifier::Repeat(n) => write!(f, "{{{}}}", n),
            Quantifier::RepeatRange(from, to) => write!(f, "{{{},{}}}", from, to),
            Quantifier::AtLeast(n) => write!(f, "{{{},}}", n),
        }
    }
}

impl Display for BackReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackReference::Index(index) => write!(f, "\\{}", index),
            BackReference::Name(name) => write!(f, "\\k<{}>", name),
        }
    }
}
