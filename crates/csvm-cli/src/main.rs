//! CSV Merger CLI
//!
//! Command-line tool for merging delimited files into a single table with
//! per-row source tracking.

use clap::{Parser, Subcommand};
use csvm_core::{
    collect_documents, delimiter_byte, merge_all, parse_document, serialize, InputDocument,
    MergedTable,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvm")]
#[command(about = "Merge delimited files into a single CSV", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge files into a single output file
    Merge {
        /// Input files or directories (directories contribute their .csv files)
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Delimiter used in the input files (e.g. , ; | or \t)
        #[arg(long, default_value = ",")]
        input_delimiter: String,

        /// Delimiter for the merged output
        #[arg(long, default_value = ";")]
        output_delimiter: String,

        /// Quote only fields that need escaping instead of every field
        #[arg(long)]
        minimal_quoting: bool,

        /// Output file path
        #[arg(short, long, default_value = "merged_output.csv")]
        output: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Preview the merged table without writing a file
    Show {
        /// Input files or directories
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Delimiter used in the input files
        #[arg(long, default_value = ",")]
        input_delimiter: String,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Columns to display (comma-separated)
        #[arg(short, long)]
        columns: Option<String>,
    },

    /// Parse and display a single file
    Parse {
        /// Path to the file
        #[arg(short, long)]
        file: PathBuf,

        /// Delimiter used in the file
        #[arg(long, default_value = ",")]
        delimiter: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> csvm_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            input,
            input_delimiter,
            output_delimiter,
            minimal_quoting,
            output,
            format,
        } => cmd_merge(
            &input,
            &input_delimiter,
            &output_delimiter,
            !minimal_quoting,
            &output,
            &format,
        ),
        Commands::Show {
            input,
            input_delimiter,
            limit,
            columns,
        } => cmd_show(&input, &input_delimiter, limit, columns),
        Commands::Parse { file, delimiter } => cmd_parse(&file, &delimiter),
    }
}

fn cmd_merge(
    inputs: &[PathBuf],
    input_delimiter: &str,
    output_delimiter: &str,
    quote_all: bool,
    output: &PathBuf,
    format: &str,
) -> csvm_core::Result<()> {
    let in_delim = delimiter_byte(input_delimiter)?;
    let out_delim = delimiter_byte(output_delimiter)?;

    let documents = collect_documents(inputs)?;
    println!("{} file(s) loaded.", documents.len());

    let merged = merge_all(&documents, in_delim)?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    match format.to_lowercase().as_str() {
        "csv" => {
            let bytes = serialize(&merged, out_delim, quote_all)?;
            writer.write_all(&bytes)?;
        }
        "json" => {
            let json = serde_json::to_string_pretty(&merged)?;
            writeln!(writer, "{}", json)?;
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    println!("{}", merged.summary());
    println!("Wrote {}", output.display());

    Ok(())
}

fn cmd_show(
    inputs: &[PathBuf],
    input_delimiter: &str,
    limit: Option<usize>,
    columns: Option<String>,
) -> csvm_core::Result<()> {
    let in_delim = delimiter_byte(input_delimiter)?;

    let documents = collect_documents(inputs)?;
    let merged = merge_all(&documents, in_delim)?;

    // Filter columns if specified
    let col_filter: Option<Vec<&str>> = columns.as_ref().map(|c| c.split(',').collect());

    let display_cols: Vec<&csvm_core::Column> = if let Some(ref filter) = col_filter {
        merged
            .columns
            .iter()
            .filter(|c| filter.contains(&c.name.as_str()))
            .collect()
    } else {
        merged.columns.iter().collect()
    };

    print_table(&merged, &display_cols, limit);
    println!();
    println!("{}", merged.summary());

    Ok(())
}

fn print_table(merged: &MergedTable, display_cols: &[&csvm_core::Column], limit: Option<usize>) {
    let header: Vec<&str> = display_cols.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    let row_limit = limit.unwrap_or(merged.rows.len());
    for row in merged.rows.iter().take(row_limit) {
        let values: Vec<&str> = display_cols
            .iter()
            .map(|col| row.get(col.index).unwrap_or_default())
            .collect();
        println!("{}", values.join("\t"));
    }

    if merged.rows.len() > row_limit {
        println!("... ({} more rows)", merged.rows.len() - row_limit);
    }
}

fn cmd_parse(file: &PathBuf, delimiter: &str) -> csvm_core::Result<()> {
    let delim = delimiter_byte(delimiter)?;
    let document = InputDocument::from_path(file)?;
    let table = parse_document(&document, delim)?;

    println!("File: {}", file.display());
    println!("Columns: {}", table.column_count());
    println!("Rows: {}", table.row_count());
    println!();

    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    // Print first 10 rows
    for row in table.rows.iter().take(10) {
        let values: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        println!("{}", values.join("\t"));
    }

    if table.row_count() > 10 {
        println!("... ({} more rows)", table.row_count() - 10);
    }

    Ok(())
}
