use std::str::FromStr;

use indoc::indoc;

use super::*;

const DOCUMENT: &str = indoc! {r#"
    <test-run testcasecount="3" passed="1" failed="2" duration="0.3">
      <test-suite type="TestFixture" fullname="Suite.A" result="Failed">
        <test-case id="1" result="Passed" />
        <test-case id="2" result="Failed">
          <failure>
            <message>boom</message>
            <stack-trace>at X</stack-trace>
          </failure>
        </test-case>
        <test-case id="3" result="Failed" />
      </test-suite>
      <test-suite type="TestFixture" fullname="Suite.B" result="Passed">
        <test-case id="4" />
      </test-suite>
    </test-run>
"#};

#[test]
fn failure_detail_of_failed_case() -> Result<()> {
    let run = TestRun::from_str(DOCUMENT)?;
    let failure = run.suites()[0].cases()[1].failure()?;
    assert_eq!(failure.message()?, "boom");
    assert_eq!(failure.stack_trace()?, "at X");
    Ok(())
}

#[test]
fn failure_detail_of_passed_case_is_an_error() -> Result<()> {
    let run = TestRun::from_str(DOCUMENT)?;
    match run.suites()[0].cases()[0].failure() {
        Err(Error::NotFailed(id)) => assert_eq!(id, "1"),
        other => panic!("expected not failed, got {other:?}"),
    }
    Ok(())
}

#[test]
fn failed_case_without_failure_element_is_an_error() -> Result<()> {
    let run = TestRun::from_str(DOCUMENT)?;
    assert!(matches!(
        run.suites()[0].cases()[2].failure(),
        Err(Error::MissingElement {
            parent: "test-case",
            child: "failure"
        })
    ));
    Ok(())
}

#[test]
fn case_without_result_cannot_be_classified() -> Result<()> {
    let run = TestRun::from_str(DOCUMENT)?;
    assert!(matches!(
        run.suites()[1].cases()[0].is_failed(),
        Err(Error::MissingAttribute {
            attribute: "result",
            ..
        })
    ));
    assert!(run.has_failures()?);
    Ok(())
}

#[test]
fn suite_failure_signal_only_reads_suite_attributes() -> Result<()> {
    let run = TestRun::from_str(DOCUMENT)?;
    assert!(run.suites()[0].signals_failure());
    assert!(!run.suites()[1].signals_failure());
    Ok(())
}

#[test]
fn passing_run_has_no_failures() -> Result<()> {
    let run = TestRun::from_str(indoc! {r#"
        <test-run>
          <test-suite type="TestFixture">
            <test-case id="1" result="Passed" />
          </test-suite>
          <test-suite type="Assembly">
            <test-case id="2" result="Failed" />
          </test-suite>
        </test-run>
    "#})?;
    assert_eq!(run.cases().count(), 1);
    assert!(!run.has_failures()?);
    Ok(())
}
