// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::process::exit;

use clap::{Arg, ArgAction};
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;

use nunit_report::command::Command;
use nunit_report::commands::{APP_NAME, APP_VERSION, ERROR_STATUS_CODE, VERBOSE};
use nunit_report::utils::get_report_commands;
use nunit_report::utils::reader::{ReadBuffer, Reader};
use nunit_report::utils::writer::Writer;
use nunit_report::Error;

fn main() -> Result<(), Error> {
    let mut app = clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  nunit-report renders NUnit 3 test result documents, such as the XML file the
  Unity test runner writes after a batch mode run, as a readable report. The
  report lists the run summary, every test fixture and its test cases, and
  the reason and stack trace of every failed test case."#,
        )
        .arg(
            Arg::new(VERBOSE.0)
                .short(VERBOSE.1)
                .long(VERBOSE.0)
                .action(ArgAction::Count)
                .global(true)
                .help("Sets the level of logging, add v's to increase output"),
        )
        .arg_required_else_help(true);

    let commands: Vec<Box<dyn Command>> = get_report_commands();

    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    let level = match app.get_count(VERBOSE.0) {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Unable to initialise logging {e}");
    }

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                debug!("Running command {}", name);
                let mut output_writer = Writer::default();

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer
                            .write_err(format!("Error occurred {e}"))
                            .expect("failed to write to stderr");

                        exit(ERROR_STATUS_CODE);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{}", help);
            }
        }
        None => {
            println!("{}", help);
        }
    }

    Ok(())
}
