// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! In-memory model of an NUnit 3 results document.
//!
//! The tree mirrors the shape Unity exports: a `test-run` root holding nested
//! `test-suite` elements, of which only the `TestFixture` ones are kept, each
//! owning its `test-case` children. Attribute values are kept verbatim and are
//! only checked for presence when they are read, see [`attributes::Attributes`].

pub mod attributes;
pub mod errors;
pub mod loader;

use std::str::FromStr;

use crate::results::attributes::{Attributes, CaseAttribute, RunAttribute, SuiteAttribute};
use crate::results::errors::Error;

pub type Result<R> = std::result::Result<R, Error>;

/// Literal result value Unity writes for a failed suite or case.
pub const FAILURE_MARKER: &str = "Failed";
pub const FIXTURE_TYPE: &str = "TestFixture";

pub(crate) const TEST_RUN: &str = "test-run";
pub(crate) const TEST_SUITE: &str = "test-suite";
pub(crate) const TEST_CASE: &str = "test-case";
pub(crate) const FAILURE: &str = "failure";
pub(crate) const MESSAGE: &str = "message";
pub(crate) const STACK_TRACE: &str = "stack-trace";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRun {
    pub(crate) testcasecount: Option<String>,
    pub(crate) passed: Option<String>,
    pub(crate) failed: Option<String>,
    pub(crate) duration: Option<String>,
    pub(crate) suites: Vec<TestSuite>,
}

impl TestRun {
    /// Fixture level suites in document order.
    pub fn suites(&self) -> &[TestSuite] {
        &self.suites
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.suites.iter().flat_map(|suite| suite.cases.iter())
    }

    /// True when any case of any fixture carries the failure marker.
    pub fn has_failures(&self) -> Result<bool> {
        for case in self.cases() {
            if case.is_failed()? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl FromStr for TestRun {
    type Err = Error;

    fn from_str(document: &str) -> Result<Self> {
        loader::load_from_reader(document.as_bytes())
    }
}

impl Attributes for TestRun {
    type Attribute = RunAttribute;
    const ELEMENT: &'static str = TEST_RUN;

    fn attribute(&self, attribute: RunAttribute) -> Option<&str> {
        match attribute {
            RunAttribute::TestCaseCount => self.testcasecount.as_deref(),
            RunAttribute::Passed => self.passed.as_deref(),
            RunAttribute::Failed => self.failed.as_deref(),
            RunAttribute::Duration => self.duration.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    pub(crate) fullname: Option<String>,
    pub(crate) testcasecount: Option<String>,
    pub(crate) result: Option<String>,
    pub(crate) start_time: Option<String>,
    pub(crate) end_time: Option<String>,
    pub(crate) duration: Option<String>,
    pub(crate) cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Whether any attribute present on the suite itself is the failure marker.
    /// Case results are not consulted.
    pub fn signals_failure(&self) -> bool {
        SuiteAttribute::ALL
            .iter()
            .filter_map(|each| self.attribute(*each))
            .any(|value| value == FAILURE_MARKER)
    }
}

impl Attributes for TestSuite {
    type Attribute = SuiteAttribute;
    const ELEMENT: &'static str = TEST_SUITE;

    fn attribute(&self, attribute: SuiteAttribute) -> Option<&str> {
        match attribute {
            SuiteAttribute::FullName => self.fullname.as_deref(),
            SuiteAttribute::TestCaseCount => self.testcasecount.as_deref(),
            SuiteAttribute::Result => self.result.as_deref(),
            SuiteAttribute::StartTime => self.start_time.as_deref(),
            SuiteAttribute::EndTime => self.end_time.as_deref(),
            SuiteAttribute::Duration => self.duration.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    pub(crate) id: Option<String>,
    pub(crate) fullname: Option<String>,
    pub(crate) methodname: Option<String>,
    pub(crate) duration: Option<String>,
    pub(crate) asserts: Option<String>,
    pub(crate) result: Option<String>,
    pub(crate) failure: Option<Failure>,
}

impl TestCase {
    pub fn is_failed(&self) -> Result<bool> {
        Ok(self.get(CaseAttribute::Result)?.contains(FAILURE_MARKER))
    }

    /// Failure detail of a failed case. Asking a case that did not fail is an
    /// error, as is a failed case whose document omitted the `failure` element.
    pub fn failure(&self) -> Result<&Failure> {
        if !self.is_failed()? {
            return Err(Error::NotFailed(
                self.id.clone().unwrap_or_else(|| String::from("<unknown>")),
            ));
        }
        self.failure.as_ref().ok_or(Error::MissingElement {
            parent: TEST_CASE,
            child: FAILURE,
        })
    }
}

impl Attributes for TestCase {
    type Attribute = CaseAttribute;
    const ELEMENT: &'static str = TEST_CASE;

    fn attribute(&self, attribute: CaseAttribute) -> Option<&str> {
        match attribute {
            CaseAttribute::Id => self.id.as_deref(),
            CaseAttribute::FullName => self.fullname.as_deref(),
            CaseAttribute::MethodName => self.methodname.as_deref(),
            CaseAttribute::Duration => self.duration.as_deref(),
            CaseAttribute::Asserts => self.asserts.as_deref(),
            CaseAttribute::Result => self.result.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub(crate) message: Option<String>,
    pub(crate) stack_trace: Option<String>,
}

impl Failure {
    pub fn message(&self) -> Result<&str> {
        self.message.as_deref().ok_or(Error::MissingElement {
            parent: FAILURE,
            child: MESSAGE,
        })
    }

    pub fn stack_trace(&self) -> Result<&str> {
        self.stack_trace.as_deref().ok_or(Error::MissingElement {
            parent: FAILURE,
            child: STACK_TRACE,
        })
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
