// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{command::Command, commands};

pub mod reader;
pub mod writer;

pub fn get_report_commands() -> Vec<Box<dyn Command>> {
    vec![Box::new(commands::report::Report::new())]
}
