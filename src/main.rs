// MRZ parsing command line tool
// Reads OCR output from a file or stdin and reports the checked fields

use chrono::{Local, NaiveDate};
use clap::Parser;
use mrzscan::{
    models::{ExpiryValidationResult, FormatValidationResult, ParsedRecord, Validity},
    utils::MrzError,
    validation::{ExpiryValidator, FormatValidator},
    MrzParser,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mrzscan", version, about = "Parse and check an ICAO 9303 machine readable zone")]
struct Args {
    /// Text file holding the MRZ lines; stdin when omitted
    input: Option<PathBuf>,

    /// Print the parsed record as JSON
    #[arg(long)]
    json: bool,

    /// Reference date for the expiry check (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_reference_date)]
    today: Option<NaiveDate>,
}

fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{}: {}", s, e))
}

fn flag(validity: Option<Validity>) -> &'static str {
    match validity {
        Some(Validity::Valid) => "PASSED",
        Some(Validity::Invalid) => "FAILED",
        Some(Validity::Indeterminate) => "INDETERMINATE",
        None => "N/A",
    }
}

// Function to print a detailed report
fn print_detailed_report(
    record: &ParsedRecord,
    format: &FormatValidationResult,
    expiry: &ExpiryValidationResult,
) {
    println!("\n===============================================");
    println!("          MRZ PARSING DETAILED REPORT");
    println!("===============================================\n");

    println!("DOCUMENT INFORMATION:");
    println!("  Layout: {:?}", record.document_type);
    println!("  Document Code: {}", record.document_code);
    println!("  Issuing Country: {}", record.issuing_country);
    println!("  Document Number: {}", record.document_number);
    println!("  Name: {}", record.full_name());
    println!("  Nationality: {}", record.nationality);
    println!("  Date of Birth: {}", record.date_of_birth);
    println!("  Sex: {:?}", record.sex);
    println!("  Date of Expiry: {}", record.date_of_expiry.as_deref().unwrap_or("-"));
    println!("  Optional Data: {}", record.optional_data);
    if let Some(extra) = &record.optional_data_2 {
        println!("  Optional Data 2: {}", extra);
    }

    println!("\nCHECK DIGITS:");
    println!("  1. Document Number: {}", flag(record.document_number_valid));
    println!("  2. Date of Birth: {}", flag(record.date_of_birth_valid));
    println!("  3. Date of Expiry: {}", flag(record.date_of_expiry_valid));
    println!("  4. Personal Number: {}", flag(record.optional_data_valid));
    println!("  5. Composite: {}", flag(record.composite_valid));
    println!("  Expiry Status: {:?}", expiry.status);

    let issues = format.issues.iter().chain(expiry.issues.iter());
    if !record.errors.is_empty() || format.issues.len() + expiry.issues.len() > 0 {
        println!("\nISSUES FOUND:");
        for error in &record.errors {
            println!("  - [MRZ] {}", error);
        }
        for issue in issues {
            println!("  - [{:?}] {}", issue.issue_type, issue.message);
        }
    }

    println!(
        "\nMRZ parsing result: {}",
        if record.is_valid() { "VALID" } else { "INVALID" }
    );
}

fn read_input(path: Option<&PathBuf>) -> Result<String, MrzError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: Args) -> Result<(), MrzError> {
    let text = read_input(args.input.as_ref())?;
    let record = MrzParser::new().parse(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let format = FormatValidator::validate(&record);
    let expiry = ExpiryValidator::validate(&record, today);
    print_detailed_report(&record, &format, &expiry);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
