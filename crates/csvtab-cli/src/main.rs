use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use csvtab::{Event, Provider};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Lf,
    Crlf,
    Cr,
}

#[derive(Parser, Debug)]
#[command(
    name = "csvtab-cli",
    about = "CSV ↔ JSON conversion with column type inference",
    version
)]
struct Args {
    /// Encode a JSON array of objects to CSV (default decodes CSV to JSON)
    #[arg(short, long)]
    encode: bool,

    /// Print inferred column names, types and blank flags instead of rows
    #[arg(long, conflicts_with = "encode")]
    schema: bool,

    /// JSON options file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field delimiter (may be several characters)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Quote character
    #[arg(long)]
    quote: Option<char>,

    /// Treat the first line as data and name columns `Column N`
    #[arg(long)]
    no_header: bool,

    /// Keep leading/trailing whitespace in fields
    #[arg(long)]
    preserve_whitespace: bool,

    /// Line ending for output (input accepts CRLF, LF and CR)
    #[arg(long, value_enum)]
    line_ending: Option<LineEndingArg>,

    /// Fail on unterminated quoted fields
    #[arg(long)]
    strict: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = build_options(&args)?;

    if args.encode {
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        let table = csvtab::Table::from_json(&value)?;
        let mut writer = csvtab::Writer::new(options);
        print!("{}", writer.write_to_string(&table)?);
        return Ok(());
    }

    let mut parser = csvtab::Parser::new(options).strict(args.strict);
    let _skipped = parser.subscribe(|e| {
        if let Event::RowSkipped(row) = e {
            tracing::warn!(
                line = row.line,
                expected = row.expected,
                found = row.found,
                "skipping row with mismatched field count"
            );
        }
    });
    let table = parser.parse(&buf)?;

    let out = if args.schema {
        serde_json::to_value(&table.columns)?
    } else {
        table.to_json()
    };
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn build_options(args: &Args) -> Result<csvtab::Options> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading options from {}", path.display()))?;
            serde_json::from_str::<csvtab::Options>(&text)
                .with_context(|| format!("parsing options in {}", path.display()))?
        }
        None => csvtab::Options::default(),
    };
    if let Some(d) = &args.delimiter {
        options.delimiter = unescape_delimiter(d);
    }
    if let Some(q) = args.quote {
        options.quote = q;
    }
    if args.no_header {
        options.first_row_as_header = false;
    }
    if args.preserve_whitespace {
        options.preserve_whitespace = true;
    }
    if let Some(le) = args.line_ending {
        // Output terminator goes first; the rest stay recognised on input.
        let primary = line_ending(le);
        options.line_endings.retain(|e| *e != primary.as_str());
        options.line_endings.insert(0, primary.as_str().to_string());
    }
    options.validate()?;
    Ok(options)
}

fn line_ending(arg: LineEndingArg) -> csvtab::LineEnding {
    match arg {
        LineEndingArg::Lf => csvtab::LineEnding::Lf,
        LineEndingArg::Crlf => csvtab::LineEnding::CrLf,
        LineEndingArg::Cr => csvtab::LineEnding::Cr,
    }
}

// Shells make a literal tab awkward to pass.
fn unescape_delimiter(d: &str) -> String {
    match d {
        "\\t" | "tab" => "\t".to_string(),
        other => other.to_string(),
    }
}
