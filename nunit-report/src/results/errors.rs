// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The path `{0}` does not exist or could not be opened")]
    MissingFile(String),
    #[error("Results document is malformed: {0}")]
    MalformedDocument(String),
    #[error("Element `{element}` has no attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("Element `{parent}` has no `{child}` child element")]
    MissingElement {
        parent: &'static str,
        child: &'static str,
    },
    #[error("Test case `{0}` did not fail, it carries no failure detail")]
    NotFailed(String),
    #[error("Unable to write report to `{path}`: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Formatting error when writing {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("XML error when writing report {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Report output was not valid UTF-8 {0}")]
    Utf8Error(#[from] FromUtf8Error),
    #[error("{0}")]
    IllegalArguments(String),
}
