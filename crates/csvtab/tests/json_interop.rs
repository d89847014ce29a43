#![cfg(feature = "json")]
use csvtab::{DataType, Options, Table};
use serde_json::json;

#[test]
fn parsed_table_to_typed_json() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("Name,Age,Member\nAlice,30,true\nBob,,false", &Options::default())?;
    assert_eq!(
        table.to_json(),
        json!([
            {"Name": "Alice", "Age": 30, "Member": true},
            {"Name": "Bob", "Age": null, "Member": false}
        ])
    );
    Ok(())
}

#[test]
fn json_rows_to_csv() -> Result<(), Box<dyn std::error::Error>> {
    let value = json!([
        {"id": 1, "name": "x,y", "ok": true},
        {"id": 2, "ok": null}
    ]);
    let table = Table::from_json(&value)?;
    let out = csvtab::write_to_string(&table, &Options::default().with_line_endings(["\n"]))?;
    assert_eq!(out, "id,name,ok\n1,\"x,y\",true\n2,,\n");
    Ok(())
}

#[test]
fn nested_json_is_rejected() {
    let value = json!([{"a": [1, 2]}]);
    assert!(Table::from_json(&value).is_err());
    assert!(Table::from_json(&json!({"a": 1})).is_err());
}

#[test]
fn options_from_partial_json() -> Result<(), Box<dyn std::error::Error>> {
    let options: Options =
        serde_json::from_str(r#"{"delimiter": ";", "firstRowAsHeader": false}"#)?;
    assert_eq!(options.delimiter, ";");
    assert!(!options.first_row_as_header);
    assert_eq!(options.quote, '"');
    assert_eq!(options.line_endings, Options::default().line_endings);
    Ok(())
}

#[test]
fn schema_serializes() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("a\n1", &Options::default())?;
    assert_eq!(table.columns[0].data_type, DataType::Integer);
    let v = serde_json::to_value(&table.columns)?;
    assert_eq!(v, json!([{"name": "a", "dataType": "Integer", "allowBlank": false}]));
    Ok(())
}
