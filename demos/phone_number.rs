// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::PatternBuilder;

pub fn main() {
    validate();
    find_all();
}

fn validate() {
    let mut re = PatternBuilder::new()
        .start_of_line()
        .digit()
        .exactly(3)
        .literal("-")
        .digit()
        .exactly(3)
        .literal("-")
        .digit()
        .exactly(4)
        .end_of_line();

    println!("Pattern: {}", re);

    for text in ["555-123-4567", "555-1234-567"] {
        println!("{} is valid: {}", text, re.test(text));
    }
}

fn find_all() {
    let mut re = PatternBuilder::new().digit().one_or_more().run_times(2);
    re.add_listener(|e| eprintln!("Error: {}", e));

    // stops after two matches
    for captures in re.execute("123 abc 456 def 789") {
        if let Some(m) = captures.first() {
            println!("Found match: {} at {}..{}", m.as_str(), m.start(), m.end());
        }
    }

    // reported to the listener, the cap stays at 2
    let re = re.run_times(-1);
    println!("Result cap: {:?}", re.result_cap());
}
