// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::commands::reporters::colorize::Colorizer;
use crate::results::errors::Error;
use crate::results::Result;
use crate::utils::writer::Writer;

const HTML: &str = "html";
const LINE_BREAK: &str = "br";

/// Where a finished report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The command's output writer, normally standard output.
    Stream,
    /// An HTML file at the given path.
    File(PathBuf),
}

/// Delivers `report` to `destination`. Colors are only ever applied to the
/// stream. A failed write leaves `report` untouched so emitting can be retried.
pub fn emit(
    report: &str,
    destination: &Destination,
    color: bool,
    writer: &mut Writer,
) -> Result<()> {
    match destination {
        Destination::Stream => {
            if color {
                writeln!(writer, "{}", Colorizer::default().colorize(report))?;
            } else {
                writeln!(writer, "{}", report)?;
            }
            writer.flush()?;
            Ok(())
        }
        Destination::File(path) => write_html(report, path),
    }
}

/// `report` as a minimal HTML document, each line break replaced by `<br/>`.
pub fn html_payload(report: &str) -> Result<String> {
    let mut xml = quick_xml::Writer::new(Vec::with_capacity(report.len() + 16));
    xml.write_event(Event::Start(BytesStart::new(HTML)))?;
    for (index, line) in report.split('\n').enumerate() {
        if index > 0 {
            xml.write_event(Event::Empty(BytesStart::new(LINE_BREAK)))?;
        }
        if !line.is_empty() {
            xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(line))))?;
        }
    }
    xml.write_event(Event::End(BytesEnd::new(HTML)))?;
    Ok(String::from_utf8(xml.into_inner())?)
}

fn write_html(report: &str, path: &Path) -> Result<()> {
    let payload = html_payload(report)?;
    info!("Writing HTML report to {}", path.display());
    std::fs::write(path, payload).map_err(|source| Error::WriteError {
        path: path.display().to_string(),
        source,
    })
}

/// HTML target next to the results document, `results.xml` becomes
/// `results.html`.
pub fn derive_html_path(results: &Path) -> PathBuf {
    results.with_extension(HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::writer::WriteBuffer::Vec as WBVec;
    use pretty_assertions::assert_eq;

    fn buffer_writer() -> Writer {
        Writer::new(WBVec(vec![]), WBVec(vec![]))
    }

    #[test]
    fn stream_output_is_the_report_and_a_newline() -> Result<()> {
        let mut writer = buffer_writer();
        emit("Result: Failed\n", &Destination::Stream, false, &mut writer)?;
        assert_eq!(writer.into_string()?, "Result: Failed\n\n");
        Ok(())
    }

    #[test]
    fn colored_stream_strips_back_to_the_report() -> Result<()> {
        let mut writer = buffer_writer();
        emit("Result: Failed\n", &Destination::Stream, true, &mut writer)?;
        let colored = writer.into_string()?;
        assert!(colored.contains("\x1b[0;30;41mFailed\x1b[0m"));

        let mut writer = buffer_writer();
        emit("Result: Failed\n", &Destination::Stream, true, &mut writer)?;
        assert_eq!(writer.stripped()?, "Result: Failed\n\n");
        Ok(())
    }

    #[test]
    fn html_payload_replaces_every_line_break() -> Result<()> {
        let report = "\n*** test-run ***\nResult: Failed\n\nat List<int>.Add & co\n";
        let payload = html_payload(report)?;
        assert_eq!(
            payload,
            "<html><br/>*** test-run ***<br/>Result: Failed<br/><br/>at List&lt;int&gt;.Add &amp; co<br/></html>"
        );
        assert_eq!(payload.matches("<br/>").count(), report.matches('\n').count());
        assert!(!payload.contains('\n'));
        Ok(())
    }

    #[test]
    fn html_file_is_never_colored() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("TestResults.html");
        let mut writer = buffer_writer();
        emit(
            "Result: Passed\n",
            &Destination::File(path.clone()),
            true,
            &mut writer,
        )?;
        assert_eq!(
            std::fs::read_to_string(&path)?,
            "<html>Result: Passed<br/></html>"
        );
        assert_eq!(writer.into_string()?, "");
        Ok(())
    }

    #[test]
    fn unwritable_file_is_a_write_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("TestResults.html");
        let mut writer = buffer_writer();
        match emit("report", &Destination::File(path), false, &mut writer) {
            Err(Error::WriteError { path, .. }) => assert!(path.ends_with("TestResults.html")),
            other => panic!("expected write error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn html_path_is_derived_from_results_path() {
        assert_eq!(
            derive_html_path(Path::new("project/TestResults-01032021104556.xml")),
            PathBuf::from("project/TestResults-01032021104556.html")
        );
        assert_eq!(
            derive_html_path(Path::new("results")),
            PathBuf::from("results.html")
        );
    }
}
