// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches};
use log::{debug, info};

use crate::command::Command;
use crate::commands::reporters::console::ConsoleReport;
use crate::commands::reporters::sink::{derive_html_path, emit, Destination};
use crate::commands::reporters::{ReportOptions, Verbosity};
use crate::commands::{
    FAILURE_STATUS_CODE, FORMAT, HTML_FORMAT, NO_COLOR, OUTPUT, REPORT, RESULTS, SHORT,
    STDOUT_FORMAT, SUCCESS_STATUS_CODE,
};
use crate::results::errors::Error;
use crate::results::loader::{load, load_from_reader};
use crate::results::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Report {}

#[allow(clippy::new_without_default)]
impl Report {
    pub fn new() -> Self {
        Report {}
    }
}

impl Command for Report {
    fn name(&self) -> &'static str {
        REPORT
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(REPORT)
            .about(
                r#"Renders an NUnit 3 test results document, such as the XML file the Unity
test runner exports, as an aligned plain text report on standard output or as an
HTML file. Failed test cases are followed by their failure reason and stack trace.
"#,
            )
            .arg(
                Arg::new(RESULTS.0)
                    .long(RESULTS.0)
                    .short(RESULTS.1)
                    .help("Provide the test results XML file, read from stdin when absent")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(FORMAT.0)
                    .long(FORMAT.0)
                    .short(FORMAT.1)
                    .value_parser([STDOUT_FORMAT, HTML_FORMAT])
                    .default_value(STDOUT_FORMAT)
                    .help("Print the report to stdout or write it to an HTML file")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(OUTPUT.0)
                    .long(OUTPUT.0)
                    .short(OUTPUT.1)
                    .help("Write the HTML report to this file instead of next to the results file")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(SHORT.0)
                    .long(SHORT.0)
                    .short(SHORT.1)
                    .action(ArgAction::SetTrue)
                    .help("Print a short summary, only failed test cases and their failure reasons"),
            )
            .arg(
                Arg::new(NO_COLOR.0)
                    .long(NO_COLOR.0)
                    .short(NO_COLOR.1)
                    .action(ArgAction::SetTrue)
                    .help("Do not colorize keywords on stdout"),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let results = app.get_one::<String>(RESULTS.0).map(PathBuf::from);
        let options = ReportOptions {
            verbosity: if app.get_flag(SHORT.0) {
                Verbosity::Condensed
            } else {
                Verbosity::Verbose
            },
            color: !app.get_flag(NO_COLOR.0),
        };
        let format = app
            .get_one::<String>(FORMAT.0)
            .map_or(STDOUT_FORMAT, String::as_str);
        let output = app.get_one::<String>(OUTPUT.0).map(PathBuf::from);
        let destination = destination(format, output, results.as_deref())?;
        debug!("Report options {:?}, destination {:?}", options, destination);

        let run = match &results {
            Some(path) => load(path)?,
            None => {
                info!("No results file given, reading the results document from stdin");
                load_from_reader(reader)?
            }
        };

        let report = ConsoleReport::new(&run, options).build()?;
        emit(&report, &destination, options.color, writer)?;

        Ok(if run.has_failures()? {
            FAILURE_STATUS_CODE
        } else {
            SUCCESS_STATUS_CODE
        })
    }
}

fn destination(
    format: &str,
    output: Option<PathBuf>,
    results: Option<&Path>,
) -> Result<Destination> {
    match format {
        STDOUT_FORMAT => Ok(Destination::Stream),
        HTML_FORMAT => match (output, results) {
            (Some(output), _) => Ok(Destination::File(output)),
            (None, Some(results)) => Ok(Destination::File(derive_html_path(results))),
            (None, None) => Err(Error::IllegalArguments(format!(
                "--{} is required for {} output when the results are read from stdin",
                OUTPUT.0, HTML_FORMAT
            ))),
        },
        other => Err(Error::IllegalArguments(format!(
            "unsupported output format `{other}`"
        ))),
    }
}
