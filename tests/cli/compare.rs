use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_compare_reports_both_sides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/en.json", r#"{"a": 1, "b": 2}"#)?;
    test.write_file("assets/translations/tr.json", r#"{"b": 3, "c": 4}"#)?;

    assert_cmd_snapshot!(
        test.compare_command("assets/translations/en.json", "assets/translations/tr.json"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Only in assets/translations/en.json: 1 key
      a
    Only in assets/translations/tr.json: 1 key
      c

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_compare_identical_key_sets() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"hello": "Hello", "bye": "Bye"}"#)?;
    test.write_file("tr.json", r#"{"bye": "Güle güle", "hello": "Merhaba"}"#)?;

    assert_cmd_snapshot!(test.compare_command("en.json", "tr.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Only in en.json: 0 keys
    Only in tr.json: 0 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_compare_file_with_itself() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"a": 1, "nested": {"b": 2}}"#)?;

    let output = test.compare_command("en.json", "en.json").output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Only in en.json: 0 keys\nOnly in en.json: 0 keys\n"
    );

    Ok(())
}

#[test]
fn test_compare_json_format() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": 1, "b": 2, "shared": 0}"#)?;
    test.write_file("tr.json", r#"{"shared": 0, "c": 4}"#)?;

    let output = test
        .compare_command("en.json", "tr.json")
        .args(["--format", "json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!({ "onlyInFirst": ["a", "b"], "onlyInSecond": ["c"] })
    );

    Ok(())
}

#[test]
fn test_compare_missing_file_is_input_error() -> Result<()> {
    let test = CliTest::with_file("en.json", "{}")?;

    let output = test.compare_command("en.json", "tr.json").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Cannot read tr.json"), "{stderr}");

    Ok(())
}

#[test]
fn test_compare_invalid_json_is_format_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", "{}")?;
    test.write_file("tr.json", r#"{"a": 1,"#)?;

    let output = test.compare_command("en.json", "tr.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to parse JSON file tr.json"), "{stderr}");

    Ok(())
}

#[test]
fn test_compare_array_top_level_is_format_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"["a", "b"]"#)?;
    test.write_file("tr.json", "{}")?;

    assert_cmd_snapshot!(test.compare_command("en.json", "tr.json"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Expected a JSON object at the top level of en.json, found an array
    ");

    Ok(())
}

#[test]
fn test_compare_requires_two_arguments() -> Result<()> {
    let test = CliTest::with_file("en.json", "{}")?;

    let output = test.command().args(["compare", "en.json"]).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("<SECOND>"));

    Ok(())
}

#[test]
fn test_compare_ignores_unrepresentable_values() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": 1e400, "b": 2}"#)?;
    test.write_file("tr.json", r#"{"b": "iki"}"#)?;

    let output = test.compare_command("en.json", "tr.json").output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Only in en.json: 1 key\n  a\nOnly in tr.json: 0 keys\n"
    );

    Ok(())
}
