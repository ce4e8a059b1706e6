// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use crate::commands::reporters::layout::REPORT_WIDTH;
use crate::commands::reporters::Verbosity;
use crate::results::{Failure, Result};

pub const REASON: &str = "Reason:";
pub const STACKTRACE: &str = "Stacktrace:";

/// Appends the reason, and in verbose mode the reflowed stack trace, of a
/// failed case.
pub(crate) fn render_failure(
    out: &mut String,
    failure: &Failure,
    verbosity: Verbosity,
) -> Result<()> {
    writeln!(out, "{}", REASON)?;
    writeln!(out, "{}", failure.message()?)?;
    if verbosity == Verbosity::Verbose {
        writeln!(out, "{}", STACKTRACE)?;
        writeln!(out, "{}", reflow(failure.stack_trace()?, REPORT_WIDTH))?;
    }
    Ok(())
}

/// Breaks `text` after every `width` characters, newlines in the input count
/// as characters. Words are not respected and no empty segment is left at the
/// end. A zero width leaves the text untouched.
pub fn reflow(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let mut wrapped = String::with_capacity(text.len() + text.len() / width);
    for (index, each) in text.chars().enumerate() {
        if index > 0 && index % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(each);
    }
    wrapped
}
