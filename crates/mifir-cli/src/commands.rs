use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::info;

use mifir_cli::driver::{BatchSummary, OutputFormat, run_batch};
use mifir_cli::logging::redact_value;
use mifir_core::{ConcatExplanation, NameTrace, compute_concat, explain_concat};
use mifir_standards::country_codes;

use crate::cli::{ClientArgs, OutputFormatArg, ParseArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

const COUNTRIES_PER_ROW: usize = 13;

pub fn run_parse(args: &ParseArgs) -> Result<BatchSummary> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    // Stdout stays line buffered so interactive use answers each record.
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    let format = match args.format {
        OutputFormatArg::Plain => OutputFormat::Plain,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    run_batch(reader, &mut writer, format).context("process records")
}

pub fn run_compute(args: &ClientArgs) -> Result<()> {
    info!(
        first_name = redact_value(&args.first_name),
        last_name = redact_value(&args.last_name),
        "computing concat"
    );
    let code = compute_concat(
        &args.country,
        &args.birth_date,
        &args.first_name,
        &args.last_name,
    )?;
    println!("{code}");
    Ok(())
}

pub fn run_explain(args: &ClientArgs) -> Result<()> {
    let explanation = explain_concat(
        &args.country,
        &args.birth_date,
        &args.first_name,
        &args.last_name,
    )?;
    println!("Country: {}", explanation.country);
    println!("Birth date: {}", explanation.birth_date.date());
    println!("{}", explain_table(args, &explanation));
    println!("CONCAT: {}", explanation.code);
    Ok(())
}

/// One row per normalization step, one column per name.
fn explain_table(args: &ClientArgs, explanation: &ConcatExplanation) -> Table {
    let first = &explanation.first_name;
    let last = &explanation.last_name;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell(first.role.label()),
        header_cell(last.role.label()),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(&args.first_name),
        Cell::new(&args.last_name),
    ]);
    add_step(&mut table, "Trimmed", first, last, |t| Some(&t.trimmed));
    add_step(&mut table, "Punctuation removed", first, last, |t| {
        Some(&t.without_punctuation)
    });
    add_step(&mut table, "Title stripped", first, last, |t| {
        Some(&t.without_title)
    });
    add_step(&mut table, "Prefix stripped", first, last, |t| {
        Some(&t.without_prefix)
    });
    add_step(&mut table, "First given name", first, last, |t| {
        t.given_name.as_ref()
    });
    add_step(&mut table, "Folded", first, last, |t| Some(&t.folded));
    table.add_row(vec![
        Cell::new("Field"),
        Cell::new(first.part.as_str()),
        Cell::new(last.part.as_str()),
    ]);
    table
}

fn add_step<F>(table: &mut Table, label: &str, first: &NameTrace, last: &NameTrace, value: F)
where
    F: Fn(&NameTrace) -> Option<&String>,
{
    table.add_row(vec![Cell::new(label), step_cell(value(first)), step_cell(value(last))]);
}

fn step_cell(value: Option<&String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

pub fn run_countries() {
    println!("{}", countries_table());
    println!("{} country codes", country_codes().len());
}

fn countries_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for row in country_codes().sorted().chunks(COUNTRIES_PER_ROW) {
        table.add_row(row.iter().copied().map(Cell::new).collect::<Vec<_>>());
    }
    table
}
