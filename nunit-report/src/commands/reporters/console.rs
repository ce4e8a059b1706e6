// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use log::debug;

use crate::commands::reporters::failure::render_failure;
use crate::commands::reporters::layout::{align_pair, banner, rule, Align, REPORT_WIDTH};
use crate::commands::reporters::ReportOptions;
use crate::results::attributes::{
    Attribute, Attributes, CaseAttribute, RunAttribute, SuiteAttribute,
};
use crate::results::{Result, TestRun, TestSuite, FAILURE_MARKER};

pub const RUN_HEADER: &str = " test-run ";
pub const SUITES_HEADER: &str = " test-suites ";
pub const CASES_HEADER: &str = " test cases ";

const RUN_LABEL_WIDTH: usize = 17;
const RUN_VALUE_WIDTH: usize = 29;
const SUITE_LABEL_WIDTH: usize = 19;
const SUITE_VALUE_WIDTH: usize = 31;
const CASE_COLUMN_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Run,
    Suites,
    Done,
}

/// Plain text report of a [`TestRun`].
///
/// The report is built in two phases, the run summary followed by every
/// fixture suite with its cases. Building never mutates the run, so the same
/// report can be built again with identical output.
#[derive(Debug)]
pub struct ConsoleReport<'run> {
    run: &'run TestRun,
    options: ReportOptions,
}

impl<'run> ConsoleReport<'run> {
    pub fn new(run: &'run TestRun, options: ReportOptions) -> Self {
        ConsoleReport { run, options }
    }

    pub fn build(&self) -> Result<String> {
        let mut out = String::new();
        let mut phase = Phase::Run;
        while phase != Phase::Done {
            phase = match phase {
                Phase::Run => {
                    self.run_phase(&mut out)?;
                    Phase::Suites
                }
                Phase::Suites => {
                    self.suites_phase(&mut out)?;
                    Phase::Done
                }
                Phase::Done => Phase::Done,
            };
        }
        debug!("Built console report of {} bytes", out.len());
        Ok(out)
    }

    fn run_phase(&self, out: &mut String) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", banner(RUN_HEADER, '*', REPORT_WIDTH))?;
        writeln!(out, "{}", rule('-', REPORT_WIDTH))?;
        for attribute in RunAttribute::ALL.iter().copied() {
            writeln!(
                out,
                "* {} *",
                align_pair(
                    attribute.label(),
                    self.run.get(attribute)?,
                    RUN_LABEL_WIDTH,
                    RUN_VALUE_WIDTH,
                    Align::Right
                )
            )?;
        }
        if self.options.is_verbose() {
            writeln!(out, "{}", rule('-', REPORT_WIDTH))?;
            writeln!(out, "{}", rule('*', REPORT_WIDTH))?;
        }
        Ok(())
    }

    fn suites_phase(&self, out: &mut String) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", banner(SUITES_HEADER, '*', REPORT_WIDTH))?;
        writeln!(out, "{}", rule('-', REPORT_WIDTH))?;
        for suite in self.run.suites() {
            if self.options.is_verbose() {
                writeln!(out, "{}", rule('#', REPORT_WIDTH))?;
            }
            for attribute in SuiteAttribute::ALL.iter().copied() {
                writeln!(
                    out,
                    "{}",
                    align_pair(
                        attribute.label(),
                        suite.get(attribute)?,
                        SUITE_LABEL_WIDTH,
                        SUITE_VALUE_WIDTH,
                        Align::Right
                    )
                )?;
            }
            // condensed mode leaves a failed suite open so its failing cases
            // read as part of it
            if self.options.is_verbose() || !suite.signals_failure() {
                writeln!(out, "{}", rule('-', REPORT_WIDTH))?;
            }
            self.cases(suite, out)?;
        }
        Ok(())
    }

    fn cases(&self, suite: &TestSuite, out: &mut String) -> Result<()> {
        let verbose = self.options.is_verbose();
        if verbose {
            writeln!(out, "{}", banner(CASES_HEADER, '#', REPORT_WIDTH))?;
        }
        for case in suite.cases() {
            if !verbose && !case.is_failed()? {
                continue;
            }
            for attribute in CaseAttribute::ALL.iter().copied() {
                let value = case.get(attribute)?;
                writeln!(
                    out,
                    "{}",
                    align_pair(
                        &format!("# {}:", attribute.label()),
                        value,
                        CASE_COLUMN_WIDTH,
                        CASE_COLUMN_WIDTH,
                        Align::Left
                    )
                )?;
                if value == FAILURE_MARKER {
                    render_failure(out, case.failure()?, self.options.verbosity)?;
                }
            }
            if verbose {
                writeln!(out, "{}", rule('-', REPORT_WIDTH))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
