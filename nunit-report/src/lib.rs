// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod commands;
pub mod results;
pub mod utils;

pub use crate::commands::reporters::{ReportOptions, Verbosity};
pub use crate::results::errors::Error;
pub use crate::results::{Result, TestRun};

/// Renders the results document `xml` as a plain, uncolored report.
pub fn render_report(xml: &str, options: ReportOptions) -> crate::results::Result<String> {
    let run = xml.parse::<TestRun>()?;
    crate::commands::reporters::console::ConsoleReport::new(&run, options).build()
}
