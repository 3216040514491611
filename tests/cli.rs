// SPDX-License-Identifier: MIT
//
// End-to-end checks: pipe stdin through the built binary and inspect what
// the host editor would receive.

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn cotfilter() -> Command {
    Command::cargo_bin("cotfilter").unwrap()
}

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let assert = cotfilter().args(args).write_stdin(stdin).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- line filters ------------------------------------------------------------

#[test]
fn numbered_list_skips_blank_lines() {
    cotfilter()
        .arg("markdown-numbered-list")
        .write_stdin("apples\n\npears\n")
        .assert()
        .success()
        .stdout("1. apples\n\n2. pears\n");
}

#[test]
fn hash_comments_round_trip() {
    let commented = stdout_of(&["add-hash-comments"], "a\nb\n");
    assert_eq!(commented, "#a\n#b\n");
    assert_eq!(stdout_of(&["remove-hash-comments"], &commented), "a\nb\n");
}

#[test]
fn code_block_takes_language_line() {
    assert_eq!(
        stdout_of(&["markdown-code-block"], "rust\nfn main() {}\n"),
        "```rust\nfn main() {}\n```\n"
    );
}

#[test]
fn curly_wrap_keeps_padding_outside() {
    assert_eq!(stdout_of(&["wrap-curly-braces"], "\nkey: 1\n\n"), "\n{key: 1}\n\n");
}

#[test]
fn empty_stdin_is_fine() {
    assert_eq!(stdout_of(&["markdown-list"], ""), "");
}

#[test]
fn line_numbers_overflow_fails_cleanly() {
    let start = usize::MAX.to_string();
    let assert = cotfilter()
        .args(["line-numbers", "--start", start.as_str()])
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("cotfilter: line numbers overflow"), "{stderr}");
}

// -- multi-replace -----------------------------------------------------------

#[test]
fn multi_replace_cascades() {
    assert_eq!(
        stdout_of(&["multi-replace"], "a\tb\tb\tc\nab\n"),
        "cc\n"
    );
}

#[test]
fn multi_replace_backreferences() {
    assert_eq!(
        stdout_of(&["multi-replace"], "(\\w+)@(\\w+)\t\\2 at \\1\nme@home\n"),
        "home at me\n"
    );
}

#[test]
fn invalid_pattern_fails_with_message() {
    let assert = cotfilter()
        .arg("multi-replace")
        .write_stdin("(\tx\nbody\n")
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("cotfilter: invalid pattern `(`"), "{stderr}");
}

// -- generators and conversions ----------------------------------------------

#[test]
fn random_string_ignores_stdin() {
    let out = stdout_of(&["random-string"], "selected text");
    assert_eq!(out.len(), 16);
    assert!(out.bytes().all(|b| b.is_ascii_alphanumeric()), "{out}");
}

#[test]
fn random_string_length_flag() {
    let out = stdout_of(&["random-string", "--length", "5"], "");
    assert_eq!(out.len(), 5);
}

#[test]
fn json_to_yaml() {
    assert_eq!(stdout_of(&["json-to-yaml"], "{\"name\": \"x\"}"), "name: x\n");
}

#[test]
fn csv_to_json_array_of_objects() {
    assert_eq!(
        stdout_of(&["csv-to-json"], "id,tag\n1,a\n"),
        "[\n  {\n    \"id\": \"1\",\n    \"tag\": \"a\"\n  }\n]"
    );
}

#[test]
fn csv_to_json_empty_selection() {
    assert_eq!(stdout_of(&["csv-to-json"], ""), "No CSV data selected for conversion.");
}

#[test]
fn json_to_csv_with_header() {
    assert_eq!(
        stdout_of(&["json-to-csv"], "[{\"id\": 1, \"tag\": \"a,b\"}]"),
        "id,tag\n1,\"a,b\"\n"
    );
}

#[test]
fn transform_case_flag() {
    assert_eq!(
        stdout_of(&["transform-case", "--case", "snake"], "myVariableName\n"),
        "my_variable_name"
    );
}

// -- host wiring -------------------------------------------------------------

#[test]
fn list_names_every_filter() {
    let out = stdout_of(&["list"], "");
    let names = ["markdown-headers", "multi-replace", "random-string", "csv-to-json", "json-to-csv"];
    for name in names {
        assert!(out.contains(name), "{name} missing from:\n{out}");
    }
}

#[test]
fn script_emits_host_metadata() {
    let out = stdout_of(&["script", "multi-replace"], "");
    assert!(out.starts_with(
        "#!/bin/sh\n#%%%{CotEditorXInput=AllText}%%%\n#%%%{CotEditorXOutput=ReplaceAllText}%%%\n"
    ));
    assert!(out.ends_with("exec cotfilter multi-replace \"$@\"\n"));
}

#[test]
fn unknown_filter_is_a_usage_error() {
    cotfilter().arg("no-such-filter").assert().failure().code(2);
}
