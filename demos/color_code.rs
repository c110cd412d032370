// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::{engine::Captures, PatternBuilder};

pub fn main() {
    let hex_pair = |g: PatternBuilder| {
        g.any_of("0123456789abcdefABCDEF").exactly(2)
    };

    let mut re = PatternBuilder::new()
        .literal("#")
        .named_capture("red", hex_pair)
        .named_capture("green", hex_pair)
        .named_capture("blue", hex_pair);

    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // capture groups all
    for m in re.execute(text) {
        println!("Found match: {}", m.first().unwrap().as_str());
        println!("Red: {}", m.name("red").unwrap().as_str());
        println!("Green: {}", m.name("green").unwrap().as_str());
        println!("Blue: {}", m.name("blue").unwrap().as_str());
    }

    // replace with a closure
    let rgb = re.replace(text, |caps: &Captures| {
        let channel = |name: &str| u8::from_str_radix(&caps[name], 16).unwrap_or(0);
        format!(
            "rgb({}, {}, {})",
            channel("red"),
            channel("green"),
            channel("blue")
        )
    });
    println!("{}", rgb);
}
