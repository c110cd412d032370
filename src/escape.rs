// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

const META_CHARS: [char; 14] = [
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

pub fn is_meta_char(c: char) -> bool {
    META_CHARS.contains(&c)
}

/// Prefixes every regex metacharacter in `text` with a backslash.
///
/// Only `. * + ? ^ $ { } ( ) | [ ] \` are escaped, other characters
/// (including `-` and `/`) are copied as they are.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_meta_char(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes `text` for use as the members of a character class.
///
/// Besides the metacharacters, `&` and `~` are escaped, as is any `-`
/// next to another `-`, because the engine reads `&&`, `~~` and `--`
/// inside `[...]` as set operations. A single `-` still forms a range.
pub fn escape_class_member(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut escaped = String::with_capacity(text.len());
    for (index, c) in chars.iter().copied().enumerate() {
        let doubled_dash = c == '-'
            && ((index > 0 && chars[index - 1] == '-') || chars.get(index + 1) == Some(&'-'));
        if is_meta_char(c) || c == '&' || c == '~' || doubled_dash {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Checks whether `name` can be used as the name of a capture group,
/// i.e. `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
