// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use colored::Color;

pub const RESET: &str = "\x1b[0m";

/// Keyword classes highlighted in a console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Success,
    Failure,
    Header,
}

impl Highlight {
    /// Escape sequence opening a highlighted keyword.
    pub fn start(self) -> String {
        let (attribute, foreground, background) = match self {
            Highlight::Success => ("6", Color::Black, Color::Green),
            Highlight::Failure => ("0", Color::Black, Color::Red),
            Highlight::Header => ("0", Color::Green, Color::Blue),
        };
        format!(
            "\x1b[{};{};{}m",
            attribute,
            foreground.to_fg_str(),
            background.to_bg_str()
        )
    }
}

pub const RULES: [(&str, Highlight); 7] = [
    ("Passed", Highlight::Success),
    ("passed", Highlight::Success),
    ("Failed", Highlight::Failure),
    ("failed", Highlight::Failure),
    ("test-run", Highlight::Header),
    ("test-suites", Highlight::Header),
    ("test cases", Highlight::Header),
];

/// Wraps every occurrence of a known keyword in color escapes.
///
/// Matching is on plain substrings, a keyword inside a longer word is
/// highlighted as well. At each position the first matching rule wins and the
/// scan resumes after the keyword, so inserted escapes are never rescanned.
#[derive(Debug, Clone)]
pub struct Colorizer {
    rules: Vec<(&'static str, String)>,
}

impl Default for Colorizer {
    fn default() -> Self {
        Colorizer::new(&RULES)
    }
}

impl Colorizer {
    pub fn new(rules: &[(&'static str, Highlight)]) -> Self {
        Colorizer {
            rules: rules
                .iter()
                .filter(|(keyword, _)| !keyword.is_empty())
                .map(|(keyword, highlight)| (*keyword, highlight.start()))
                .collect(),
        }
    }

    pub fn colorize(&self, text: &str) -> String {
        let mut colored = String::with_capacity(text.len() + text.len() / 4);
        let mut rest = text;
        'scan: while let Some(next) = rest.chars().next() {
            for (keyword, start) in &self.rules {
                if rest.starts_with(keyword) {
                    colored.push_str(start);
                    colored.push_str(keyword);
                    colored.push_str(RESET);
                    rest = &rest[keyword.len()..];
                    continue 'scan;
                }
            }
            colored.push(next);
            rest = &rest[next.len_utf8()..];
        }
        colored
    }
}
