// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod colorize;
pub mod console;
pub mod failure;
pub mod layout;
pub mod sink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Only failing cases, no stack traces and most borders dropped.
    Condensed,
    #[default]
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub verbosity: Verbosity,
    /// Colorize keywords when the report goes to a terminal stream.
    pub color: bool,
}

impl ReportOptions {
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}
