// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};

use crate::results::errors::Error;
use crate::results::{
    Failure, Result, TestCase, TestRun, TestSuite, FAILURE, FIXTURE_TYPE, MESSAGE, STACK_TRACE,
    TEST_CASE, TEST_RUN, TEST_SUITE,
};

const TYPE: &str = "type";

/// Loads the results document at `path`.
pub fn load(path: &Path) -> Result<TestRun> {
    if !path.is_file() {
        debug!("{} is not a readable file", path.display());
        return Err(Error::MissingFile(path.display().to_string()));
    }
    let file = File::open(path).map_err(|err| {
        debug!("Unable to open {}: {}", path.display(), err);
        Error::MissingFile(path.display().to_string())
    })?;
    debug!("Loading results document {}", path.display());
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(source: R) -> Result<TestRun> {
    let root = parse_document(BufReader::new(source))?;
    let run = build_run(&root)?;
    debug!(
        "Loaded {} fixture suites with {} test cases",
        run.suites.len(),
        run.cases().count()
    );
    Ok(run)
}

/// Untyped element tree, only alive between parsing and building the
/// typed records.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|each| each.name == name)
    }

    fn children_named<'e>(&'e self, name: &'e str) -> impl Iterator<Item = &'e Element> + 'e {
        self.children.iter().filter(move |each| each.name == name)
    }

    fn is_fixture(&self) -> bool {
        self.name == TEST_SUITE
            && self.attributes.get(TYPE).map(String::as_str) == Some(FIXTURE_TYPE)
    }
}

fn malformed<R>(reader: &quick_xml::Reader<R>, err: impl std::fmt::Display) -> Error {
    Error::MalformedDocument(format!(
        "{} at byte position {}",
        err,
        reader.buffer_position()
    ))
}

fn open_element<R>(reader: &quick_xml::Reader<R>, start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = IndexMap::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| malformed(reader, err))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| malformed(reader, err))?
            .into_owned();
        attributes.insert(key, value);
    }
    trace!("Opened element {} with {} attributes", name, attributes.len());
    Ok(Element {
        name,
        attributes,
        ..Default::default()
    })
}

/// Character data with `\r\n` and lone `\r` line endings normalized to
/// `\n`, the way an XML processor reports them.
fn normalize_line_endings(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(each) = chars.next() {
        if each == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(each);
        }
    }
    normalized
}

fn parse_document<B: BufRead>(source: B) -> Result<Element> {
    let mut reader = quick_xml::Reader::from_reader(source);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|err| malformed(&reader, err))?;
        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(malformed(&reader, "content after the root element"));
                }
                open.push(open_element(&reader, &start)?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(malformed(&reader, "content after the root element"));
                }
                let element = open_element(&reader, &start)?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                let element = match open.pop() {
                    Some(element) => element,
                    None => return Err(malformed(&reader, "unbalanced end tag")),
                };
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    let text = text.unescape().map_err(|err| malformed(&reader, err))?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(Error::MalformedDocument(format!(
            "document ended with {} unclosed elements",
            open.len()
        )));
    }

    root.ok_or_else(|| Error::MalformedDocument(String::from("document has no root element")))
}

fn collect_fixtures(element: &Element, fixtures: &mut Vec<TestSuite>) {
    for child in &element.children {
        if child.is_fixture() {
            fixtures.push(build_suite(child));
        }
        collect_fixtures(child, fixtures);
    }
}

fn build_run(root: &Element) -> Result<TestRun> {
    if root.name != TEST_RUN {
        return Err(Error::MalformedDocument(format!(
            "expected root element `{}`, found `{}`",
            TEST_RUN, root.name
        )));
    }
    let mut suites = Vec::new();
    collect_fixtures(root, &mut suites);

    Ok(TestRun {
        testcasecount: root.attribute("testcasecount"),
        passed: root.attribute("passed"),
        failed: root.attribute("failed"),
        duration: root.attribute("duration"),
        suites,
    })
}

fn build_suite(element: &Element) -> TestSuite {
    TestSuite {
        fullname: element.attribute("fullname"),
        testcasecount: element.attribute("testcasecount"),
        result: element.attribute("result"),
        start_time: element.attribute("start-time"),
        end_time: element.attribute("end-time"),
        duration: element.attribute("duration"),
        cases: element.children_named(TEST_CASE).map(build_case).collect(),
    }
}

fn build_case(element: &Element) -> TestCase {
    TestCase {
        id: element.attribute("id"),
        fullname: element.attribute("fullname"),
        methodname: element.attribute("methodname"),
        duration: element.attribute("duration"),
        asserts: element.attribute("asserts"),
        result: element.attribute("result"),
        failure: element.child(FAILURE).map(build_failure),
    }
}

fn build_failure(element: &Element) -> Failure {
    Failure {
        message: element
            .child(MESSAGE)
            .map(|each| normalize_line_endings(&each.text)),
        stack_trace: element
            .child(STACK_TRACE)
            .map(|each| normalize_line_endings(&each.text)),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
