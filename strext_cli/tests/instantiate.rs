mod common;

use predicates::prelude::PredicateBooleanExt;
use strext_core::AnyEmptyResult;

#[test]
fn instantiate_with_vars() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args([
			"--var",
			"who=World",
			r"Hello, ${who}! due to \${someone} $\{when}. ${something}",
		])
		.assert()
		.success()
		.stdout("Hello, World! due to ${someone} $\\{when}. \n");

	Ok(())
}

#[test]
fn instantiate_value_may_contain_equals() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "expr=a=b", "${expr}"])
		.assert()
		.success()
		.stdout("a=b\n");

	Ok(())
}

#[test]
fn instantiate_merges_config_and_flags() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("strext.toml"),
		"[variables]\nwho = \"config\"\nwhen = \"tomorrow\"\n",
	)?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "who=flag", "${who} ${when}"])
		.assert()
		.success()
		.stdout("flag tomorrow\n");

	Ok(())
}

#[test]
fn instantiate_from_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("greeting.txt");
	std::fs::write(&template, "Hello, ${who}! This one ends ${early")?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--file")
		.arg(&template)
		.args(["--var", "who=World"])
		.assert()
		.success()
		.stdout("Hello, World! This one ends \n");

	Ok(())
}

#[test]
fn instantiate_missing_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--file")
		.arg(tmp.path().join("missing.txt"))
		.assert()
		.code(2);

	Ok(())
}

#[test]
fn instantiate_strict_rejects_undefined() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args(["--strict", "--var", "a=1", "${a} ${zeta} ${beta}"])
		.assert()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("beta, zeta"));

	Ok(())
}

#[test]
fn instantiate_verbose_warns_about_undefined() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args(["--verbose", "[${ghost}]"])
		.assert()
		.success()
		.stdout("[]\n")
		.stderr(predicates::str::contains("warning:").and(predicates::str::contains("ghost")));

	Ok(())
}

#[test]
fn instantiate_rejects_malformed_binding() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::strext_cmd()
		.arg("instantiate")
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "novalue", "${novalue}"])
		.assert()
		.failure()
		.stderr(predicates::str::contains("invalid variable binding"));

	Ok(())
}
