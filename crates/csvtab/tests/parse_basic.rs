use csvtab::{DataType, Options, Parser};

#[test]
fn name_age_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("Name,Age\nAlice,30\nBob,25", &Options::default())?;
    let names: Vec<_> = table.column_names().collect();
    assert_eq!(names, vec!["Name", "Age"]);
    assert_eq!(table.columns[0].data_type, DataType::Text);
    assert_eq!(table.columns[1].data_type, DataType::Integer);
    assert_eq!(table.rows, vec![vec!["Alice", "30"], vec!["Bob", "25"]]);
    Ok(())
}

#[test]
fn quoted_delimiter_stays_in_field() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("A,B\n\"1,2\",3", &Options::default())?;
    assert_eq!(table.rows, vec![vec!["1,2", "3"]]);
    Ok(())
}

#[test]
fn duplicate_headers_get_suffixes() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("Name,Name,Name\na,b,c", &Options::default())?;
    let names: Vec<_> = table.column_names().collect();
    assert_eq!(names, vec!["Name", "Name1", "Name2"]);
    Ok(())
}

#[test]
fn mismatched_row_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("a,b,c\n1,2", &Options::default())?;
    assert_eq!(table.width(), 3);
    assert_eq!(table.len(), 0);
    Ok(())
}

#[test]
fn report_lists_skipped_rows() -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::default();
    let table = parser.parse("a,b\n1,2\n3\n4,5,6\n7,8")?;
    assert_eq!(table.len(), 2);
    let report = parser.report();
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.rows_kept, 2);
    let lines: Vec<_> = report.skipped.iter().map(|s| (s.line, s.found)).collect();
    assert_eq!(lines, vec![(3, 1), (4, 3)]);
    assert!(report.skipped.iter().all(|s| s.expected == 2));
    Ok(())
}

#[test]
fn without_header_uses_placeholders() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_header(false);
    let table = csvtab::parse("x,1\ny,2", &options)?;
    let names: Vec<_> = table.column_names().collect();
    assert_eq!(names, vec!["Column 1", "Column 2"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.value(0, "Column 1"), Some("x"));
    Ok(())
}

#[test]
fn without_header_uses_supplied_names() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_header(false);
    let mut parser = Parser::new(options).with_column_names(["id", " "]);
    let table = parser.parse("1,a,true\n2,b,false")?;
    let names: Vec<_> = table.column_names().collect();
    assert_eq!(names, vec!["id", "Column 2", "Column 3"]);
    assert_eq!(table.columns[2].data_type, DataType::Boolean);
    Ok(())
}

#[test]
fn trims_fields_unless_preserving() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("a,b\n  1 , x  ", &Options::default())?;
    assert_eq!(table.rows, vec![vec!["1", "x"]]);

    let options = Options::default().with_preserve_whitespace(true);
    let table = csvtab::parse("a,b\n  1 , x  ", &options)?;
    assert_eq!(table.rows, vec![vec!["  1 ", " x  "]]);
    Ok(())
}

#[test]
fn header_names_keep_their_text() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("Name, Age\nA,1", &Options::default())?;
    assert!(table.column(" Age").is_some());
    Ok(())
}

#[test]
fn blank_edges_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("\n\n  \nA,B\n1,2\n\n \n", &Options::default())?;
    assert_eq!(table.width(), 2);
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
    Ok(())
}

#[test]
fn interior_blank_line_is_a_single_empty_field() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("A\n1\n\n2", &Options::default())?;
    assert_eq!(table.rows, vec![vec!["1"], vec![""], vec!["2"]]);
    assert!(table.columns[0].allow_blank);
    assert_eq!(table.columns[0].data_type, DataType::Integer);
    Ok(())
}

#[test]
fn mixed_line_endings() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("A,B\r\n1,2\n3,4\r5,6", &Options::default())?;
    assert_eq!(table.len(), 3);
    Ok(())
}

#[test]
fn custom_line_ending_only() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_line_endings([";"]);
    let table = csvtab::parse("A,B;1,2;3,4", &options)?;
    assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    Ok(())
}

#[test]
fn multi_char_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default().with_delimiter("||");
    let table = csvtab::parse("A||B\nx|y||\"p||q\"", &options)?;
    assert_eq!(table.rows, vec![vec!["x|y", "p||q"]]);
    Ok(())
}

#[test]
fn tab_separated() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("A\tB\n1.5\tx", &Options::tsv())?;
    assert_eq!(table.columns[0].data_type, DataType::Float);
    assert_eq!(table.value(0, "B"), Some("x"));
    Ok(())
}

#[test]
fn header_only_gives_empty_table() -> Result<(), Box<dyn std::error::Error>> {
    let table = csvtab::parse("A,B\n", &Options::default())?;
    assert_eq!(table.width(), 2);
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn parser_is_reusable() -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::default();
    let first = parser.parse("A\n1\n")?;
    let second = parser.parse("B,C\nx,y\n")?;
    assert_eq!(first.width(), 1);
    assert_eq!(second.width(), 2);
    assert_eq!(parser.report().rows_kept, 1);
    Ok(())
}

#[test]
fn parse_from_reader_reads_everything() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::io::Cursor::new("A,B\n1,2\n");
    let table = csvtab::parse_from_reader(input, &Options::default())?;
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
    Ok(())
}
