use assert_cmd::Command;
use identsplit::splitters::dictionary::Dictionary;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn identsplit() -> Command {
    Command::cargo_bin("identsplit").unwrap()
}

#[test]
fn splits_identifiers_with_gentest() {
    identsplit()
        .args(["-a", "gentest", "--no-color", "getString", "notype"])
        .assert()
        .success()
        .stdout(predicate::str::contains("getString → get String"))
        .stdout(predicate::str::contains("notype → no type"));
}

#[test]
fn samurai_is_the_default_algorithm() {
    identsplit()
        .args(["--no-color", "-o", "json", "utf8Decoder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"samurai\""));
}

#[test]
fn json_output_lists_words() {
    let output = identsplit()
        .args(["-a", "gentest", "-o", "json", "ASTVisitor"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["algorithm"], "gentest");
    assert_eq!(value["identifiers"][0]["identifier"], "ASTVisitor");
    assert_eq!(value["identifiers"][0]["words"], serde_json::json!(["AST", "Visitor"]));
}

#[test]
fn expands_with_a_dictionary_file() {
    let dir = tempdir().unwrap();
    let dict_path = dir.path().join("words.dict");
    Dictionary::build_from_words(&["string".to_string(), "length".to_string()], &dict_path).unwrap();

    identsplit()
        .args(["-a", "gentest", "-e", "--no-color", "-d"])
        .arg(&dict_path)
        .arg("strlen")
        .assert()
        .success()
        .stdout(predicate::str::contains("strlen → str len (string_length)"));
}

#[test]
fn splits_identifiers_found_in_files() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("lib.rs");
    fs::write(&source, "// ignoredWord\nfn maxSize() {}\n").unwrap();

    identsplit()
        .args(["-a", "gentest", "--no-color", "-f"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("maxSize → max Size"))
        .stdout(predicate::str::contains("ignoredWord").not());
}

#[test]
fn expand_subcommand_uses_configured_phrases() {
    let dir = tempdir().unwrap();
    let phrases = dir.path().join("phrases.txt");
    fs::write(&phrases, "gps global-positioning-system\n").unwrap();
    let config = dir.path().join("identsplit.toml");
    fs::write(&config, format!("phrases = {:?}\n", phrases.display().to_string())).unwrap();

    identsplit()
        .args(["expand", "--no-color", "--config"])
        .arg(&config)
        .arg("GPS")
        .assert()
        .success()
        .stdout(predicate::str::contains("GPS → global, positioning, system"));
}

#[test]
fn no_input_is_an_error() {
    identsplit()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identifiers or files specified"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    identsplit()
        .args(["-a", "greedy", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
}

#[test]
fn missing_dictionary_is_reported() {
    identsplit()
        .args(["-d", "no_such_dictionary_xyz", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn embedded_dictionary_info() {
    identsplit()
        .args(["dict", "info", "embedded", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:"));
}

#[test]
fn generates_completions() {
    identsplit()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identsplit"));
}
