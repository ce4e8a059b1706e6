// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

/// Width of every border, banner and reflowed stack trace line.
pub const REPORT_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Formats `label` padded to `left_width` followed by `value` padded to
/// `right_width` on the given side. Neither part is truncated when it is wider
/// than its column.
pub fn align_pair(
    label: &str,
    value: &str,
    left_width: usize,
    right_width: usize,
    value_align: Align,
) -> String {
    match value_align {
        Align::Left => format!(
            "{:<lw$}{:<rw$}",
            label,
            value,
            lw = left_width,
            rw = right_width
        ),
        Align::Right => format!(
            "{:<lw$}{:>rw$}",
            label,
            value,
            lw = left_width,
            rw = right_width
        ),
    }
}

/// `title` centered in a line of `fill`, any odd padding goes to the right.
pub fn banner(title: &str, fill: char, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count());
    let left = padding / 2;
    let mut line = String::with_capacity(width.max(title.len()));
    line.extend(std::iter::repeat(fill).take(left));
    line.push_str(title);
    line.extend(std::iter::repeat(fill).take(padding - left));
    line
}

pub fn rule(fill: char, width: usize) -> String {
    std::iter::repeat(fill).take(width).collect()
}
