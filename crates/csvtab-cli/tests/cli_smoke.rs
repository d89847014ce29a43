use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn decode_csv_to_typed_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "Name,Age\nAlice,30\nBob,25\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        v,
        serde_json::json!([{"Name": "Alice", "Age": 30}, {"Name": "Bob", "Age": 25}])
    );
    Ok(())
}

#[test]
fn schema_lists_inferred_types() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "a;b\n1;x\n;y\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .args(["--schema", "--delimiter", ";"])
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v[0]["dataType"], "Integer");
    assert_eq!(v[0]["allowBlank"], true);
    assert_eq!(v[1]["dataType"], "Text");
    Ok(())
}

#[test]
fn encode_json_to_csv() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "[{{\"id\": 1, \"note\": \"a,b\"}}, {{\"id\": 2, \"note\": \"c\"}}]")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .args(["--encode", "--line-ending", "lf"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::eq("id,note\n1,\"a,b\"\n2,c\n"));
    Ok(())
}

#[test]
fn strict_reports_unterminated_quote() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "a,b\n1,\"2\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .arg("--strict")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated"));
    Ok(())
}

#[test]
fn config_file_supplies_options() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NamedTempFile::new()?;
    write!(config, "{{\"delimiter\": \"|\", \"firstRowAsHeader\": false}}")?;
    let mut input = NamedTempFile::new()?;
    write!(input, "x|1\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csvtab-cli"))
        .arg("--config")
        .arg(config.path())
        .arg(input.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!([{"Column 1": "x", "Column 2": 1}]));
    Ok(())
}
