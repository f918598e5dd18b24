//! # tally
//!
//! A CLI for checkout-counter arithmetic: print a grocery bill as a
//! fixed-width table, or prompt for two numbers and report their sum.
//!
//! ## Overview
//!
//! tally is built on top of tallylib and provides a command-line interface
//! around its receipt and prompted-addition building blocks. Amounts are
//! integer cents throughout, so the printed totals are exact.
//!
//! ## Usage
//!
//! ```bash
//! # Print the grocery bill (default command)
//! tally
//! tally bill
//!
//! # Same bill as JSON
//! tally bill --output json
//!
//! # Prompt for two numbers and print their sum
//! tally add
//!
//! # Read the numbers but report as JSON (prompts are suppressed)
//! tally add --output json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use tallylib::{prompt_addends, LineItem, Money, Receipt, ReceiptTable};

mod render;

/// The output format arg, shared by every command
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_parser(["table", "json"])
        .default_value("table")
        .help("Output format")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tally")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checkout-counter arithmetic: grocery bills and prompted sums")
        .arg(output_arg())
        .subcommand(
            Command::new("bill")
                .about("Print the grocery bill (default command)")
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Prompt for two numbers and print their sum")
                .arg(output_arg()),
        )
}

fn wants_json(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(String::as_str) == Some("json")
}

/// The day's shopping, priced in cents
fn grocery_receipt() -> Receipt {
    Receipt::from_items(vec![
        LineItem::new("Milk", 2, Money::from_cents(150)),
        LineItem::new("Bread", 1, Money::from_cents(200)),
        LineItem::new("Eggs", 1, Money::from_cents(320)),
        LineItem::new("Apples", 5, Money::from_cents(80)),
        LineItem::new("Rice", 1, Money::from_cents(500)),
    ])
}

/// Handler for the bill command
fn run_bill(matches: &ArgMatches) -> Result<()> {
    let receipt = grocery_receipt();

    if wants_json(matches) {
        let table = ReceiptTable::from_receipt(&receipt);
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render::render_receipt(&receipt));
    }

    Ok(())
}

/// Handler for the add command
fn run_add(matches: &ArgMatches) -> Result<()> {
    if wants_json(matches) {
        // Prompts would corrupt the JSON document, so they go nowhere
        let addition = prompt_addends(io::stdin().lock(), &mut io::sink())?;
        let report = serde_json::json!({
            "first": addition.first,
            "second": addition.second,
            "sum": addition.sum(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = io::stdout().lock();
        let addition = prompt_addends(io::stdin().lock(), &mut out)?;
        writeln!(out, "{addition}")?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("bill", sub)) => run_bill(sub),
        Some(("add", sub)) => run_add(sub),
        // No subcommand: behave like bill
        _ => run_bill(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
