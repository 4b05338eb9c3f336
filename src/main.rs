//! # Opcode table tools for a 65xx emulator's debugger.
//!
//! Converts the W65C02S and W65C816S opcode listings (one opcode per line, whitespace
//! separated columns) into descriptor records for the disassembler tables, and carries a
//! small procedure-aware grep for the emulator sources.
//!
//! ## Getting Started
//! ```
//! optab w65c02 w65c02s_commands-ordered.txt > w65c02_debug.inc
//! optab w65c816 --fill-end 0xff w65c816s_commands.txt > w65c816_debug.odin
//! optab awgrep 'read_u16' src/*.odin
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod awgrep;
mod config;
mod convert;
mod emit;
mod error;
mod listing;
mod modes;
mod rules;
mod term;
mod variant;
use crate::config::{Command, FillArgs};
use crate::convert::Converter;
use crate::variant::Variant;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::result::Result;
use std::{fmt, io};
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    term::init();
    // run does all the work
    run(&config::ARGS.command)?;
    Ok(())
}
/// run dispatches the chosen subcommand with stdout as the destination
fn run(command: &Command) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match command {
        Command::W65c02 { file, fill } => convert_listing(&variant::W65C02, file, *fill, &mut out)?,
        Command::W65c816 { file, fill } => convert_listing(&variant::W65C816, file, *fill, &mut out)?,
        Command::Awgrep {
            pattern,
            files,
            with_filename,
        } => {
            let hits = awgrep::run(pattern, files, *with_filename, &mut out)?;
            verbose_println!("{} matching lines", hits);
        }
    }
    out.flush()?;
    Ok(())
}
fn convert_listing(variant: &Variant, file: &str, fill: FillArgs, out: &mut dyn io::Write) -> Result<(), Error> {
    let report = Converter::new(variant, fill).convert_file(Path::new(file), out)?;
    if !report.malformed.is_empty() {
        info!("{} malformed row(s) skipped in {}", report.malformed.len(), file);
    }
    verbose_println!(
        "{}: {} records, {} placeholders",
        variant.name,
        report.records,
        report.filled
    );
    Ok(())
}
