mod common;

use rstest::rstest;
use serde_json::Value;
use serde_json::json;
use strext_core::AnyEmptyResult;

#[rstest]
#[case::positive("42", "42\n")]
#[case::negative("-42", "-42\n")]
#[case::max("9223372036854775807", "9223372036854775807\n")]
#[case::min("-9223372036854775808", "-9223372036854775808\n")]
fn to_integer_success(#[case] input: &str, #[case] expected: &str) {
	common::strext_cmd()
		.args(["to-integer", input])
		.assert()
		.success()
		.stdout(expected.to_string());
}

#[rstest]
#[case::invalid("4.2", "not a number")]
#[case::overflow("9223372036854775808", "too large")]
#[case::underflow("-9223372036854775809", "too small")]
fn to_integer_failure(#[case] input: &str, #[case] message: &str) {
	common::strext_cmd()
		.args(["to-integer", input])
		.assert()
		.code(1)
		.stderr(predicates::str::contains(message));
}

#[test]
fn to_integer_json() -> AnyEmptyResult {
	let output = common::strext_cmd()
		.args(["to-integer", "--format", "json", "17"])
		.output()?;
	assert!(output.status.success());
	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value, json!({ "outcome": "success", "value": 17 }));

	let output = common::strext_cmd()
		.args(["to-integer", "--format", "json", "99999999999999999999"])
		.output()?;
	assert_eq!(output.status.code(), Some(1));
	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value, json!({ "outcome": "overflow" }));

	Ok(())
}

#[test]
fn to_integer_reads_stdin() {
	common::strext_cmd()
		.arg("to-integer")
		.write_stdin("123\n")
		.assert()
		.success()
		.stdout("123\n");
}

#[test]
fn split_prints_one_piece_per_line() {
	common::strext_cmd()
		.args(["split", "--delimiter", "::", "Hello::World!::This:Day"])
		.assert()
		.success()
		.stdout("Hello\nWorld!\nThis:Day\n");
}

#[test]
fn split_json_keeps_empty_pieces() -> AnyEmptyResult {
	let output = common::strext_cmd()
		.args(["split", "-d", ",", "--format", "json", ",a,,b,"])
		.output()?;
	assert!(output.status.success());
	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value, json!(["", "a", "", "b", ""]));

	Ok(())
}

#[test]
fn join_pieces() {
	common::strext_cmd()
		.args(["join", "--delimiter", ", ", "Hello", "World!"])
		.assert()
		.success()
		.stdout("Hello, World!\n");
}

#[test]
fn trim_text() {
	common::strext_cmd()
		.args(["trim", "  \t Hello, World! \r\n "])
		.assert()
		.success()
		.stdout("Hello, World!\n");
}

#[test]
fn indent_text() {
	common::strext_cmd()
		.args(["indent", "--columns", "4", "first\r\nsecond\r\nthird"])
		.assert()
		.success()
		.stdout("first\r\n    second\r\n    third\n");
}

#[test]
fn lower_text() {
	common::strext_cmd()
		.args(["lower", "fOo1bAr"])
		.assert()
		.success()
		.stdout("foo1bar\n");
}

#[test]
fn elements_json() -> AnyEmptyResult {
	let output = common::strext_cmd()
		.args(["elements", "--format", "json", r#"[a, {b, c}, "d,e"]"#])
		.output()?;
	assert!(output.status.success());
	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value, json!(["a", "{b, c}", "\"d,e\""]));

	Ok(())
}

#[test]
fn missing_subcommand_fails() {
	common::strext_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
