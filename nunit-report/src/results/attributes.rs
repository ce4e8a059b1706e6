// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::results::errors::Error;
use crate::results::Result;

/// A named attribute of one kind of results element.
pub trait Attribute: Copy {
    /// Attribute name as it appears in the XML document.
    fn name(self) -> &'static str;
    /// Label printed in front of the value in the console report.
    fn label(self) -> &'static str;
}

/// Typed attribute access for the elements of the results tree.
///
/// `attribute` reports what the document held, `get` turns absence into
/// [`Error::MissingAttribute`]. Nothing here substitutes defaults, a caller
/// that wants one has to handle the error itself.
pub trait Attributes {
    type Attribute: Attribute;
    const ELEMENT: &'static str;

    fn attribute(&self, attribute: Self::Attribute) -> Option<&str>;

    fn get(&self, attribute: Self::Attribute) -> Result<&str> {
        self.attribute(attribute)
            .ok_or_else(|| Error::MissingAttribute {
                element: Self::ELEMENT,
                attribute: attribute.name(),
            })
    }
}

pub fn get<N: Attributes>(node: &N, attribute: N::Attribute) -> Result<&str> {
    node.get(attribute)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAttribute {
    TestCaseCount,
    Passed,
    Failed,
    Duration,
}

impl RunAttribute {
    pub const ALL: [RunAttribute; 4] = [
        RunAttribute::TestCaseCount,
        RunAttribute::Passed,
        RunAttribute::Failed,
        RunAttribute::Duration,
    ];
}

impl Attribute for RunAttribute {
    fn name(self) -> &'static str {
        match self {
            RunAttribute::TestCaseCount => "testcasecount",
            RunAttribute::Passed => "passed",
            RunAttribute::Failed => "failed",
            RunAttribute::Duration => "duration",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RunAttribute::TestCaseCount => "TC Count:",
            RunAttribute::Passed => "TC Passed:",
            RunAttribute::Failed => "TC Failed:",
            RunAttribute::Duration => "Duration:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteAttribute {
    FullName,
    TestCaseCount,
    Result,
    StartTime,
    EndTime,
    Duration,
}

impl SuiteAttribute {
    pub const ALL: [SuiteAttribute; 6] = [
        SuiteAttribute::FullName,
        SuiteAttribute::TestCaseCount,
        SuiteAttribute::Result,
        SuiteAttribute::StartTime,
        SuiteAttribute::EndTime,
        SuiteAttribute::Duration,
    ];
}

impl Attribute for SuiteAttribute {
    fn name(self) -> &'static str {
        match self {
            SuiteAttribute::FullName => "fullname",
            SuiteAttribute::TestCaseCount => "testcasecount",
            SuiteAttribute::Result => "result",
            SuiteAttribute::StartTime => "start-time",
            SuiteAttribute::EndTime => "end-time",
            SuiteAttribute::Duration => "duration",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SuiteAttribute::FullName => "Test name:",
            SuiteAttribute::TestCaseCount => "Testcase count:",
            SuiteAttribute::Result => "Result:",
            SuiteAttribute::StartTime => "Start time:",
            SuiteAttribute::EndTime => "End time:",
            SuiteAttribute::Duration => "Duration:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseAttribute {
    Id,
    FullName,
    MethodName,
    Duration,
    Asserts,
    Result,
}

impl CaseAttribute {
    pub const ALL: [CaseAttribute; 6] = [
        CaseAttribute::Id,
        CaseAttribute::FullName,
        CaseAttribute::MethodName,
        CaseAttribute::Duration,
        CaseAttribute::Asserts,
        CaseAttribute::Result,
    ];
}

impl Attribute for CaseAttribute {
    fn name(self) -> &'static str {
        match self {
            CaseAttribute::Id => "id",
            CaseAttribute::FullName => "fullname",
            CaseAttribute::MethodName => "methodname",
            CaseAttribute::Duration => "duration",
            CaseAttribute::Asserts => "asserts",
            CaseAttribute::Result => "result",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CaseAttribute::Id => "TestID",
            CaseAttribute::FullName => "Name",
            CaseAttribute::MethodName => "Method",
            CaseAttribute::Duration => "Duration",
            CaseAttribute::Asserts => "Asserts",
            CaseAttribute::Result => "Result",
        }
    }
}
