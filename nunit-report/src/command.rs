// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::ArgMatches;

use crate::results::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

pub trait Command {
    fn name(&self) -> &'static str;
    fn command(&self) -> clap::Command;
    fn execute(&self, args: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32>;
}
