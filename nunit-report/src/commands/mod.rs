// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod reporters;
pub mod report;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "nunit-report";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const REPORT: &str = "report";
// Arguments for report
pub const RESULTS: (&str, char) = ("results", 'r');
pub const FORMAT: (&str, char) = ("format", 'f');
pub const OUTPUT: (&str, char) = ("output", 'o');
pub const SHORT: (&str, char) = ("short", 's');
pub const NO_COLOR: (&str, char) = ("no-color", 'n');
// Global arguments
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Values for format
pub const STDOUT_FORMAT: &str = "stdout";
pub const HTML_FORMAT: &str = "html";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;
pub const FAILURE_STATUS_CODE: i32 = 19;
