use clap::{Parser, Subcommand};
use clap_num::maybe_hex;
use lazy_static::lazy_static;

/// Listing the W65C02S converter reads when no file is named
pub const DEFAULT_W65C02_LISTING: &str = "w65c02s_commands-ordered.txt";

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Report progress on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never color diagnostics, even on a terminal
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a W65C02S opcode listing into bare descriptor records
    #[command(name = "w65c02")]
    W65c02 {
        /// Opcode listing to convert
        #[arg(default_value = DEFAULT_W65C02_LISTING)]
        file: String,

        #[command(flatten)]
        fill: FillArgs,
    },
    /// Convert a W65C816S opcode listing into a complete descriptor array
    #[command(name = "w65c816")]
    W65c816 {
        /// Opcode listing to convert
        file: String,

        #[command(flatten)]
        fill: FillArgs,
    },
    /// Search files for a regex and show the procedure enclosing each hit
    Awgrep {
        /// Regular expression to look for
        pattern: String,

        /// Files to search ('-' or nothing reads stdin)
        files: Vec<String>,

        /// Prefix each hit with the name of the file it was found in
        #[arg(short = 'H', long)]
        with_filename: bool,
    },
}

#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct FillArgs {
    /// Emit ILL placeholder records for opcodes skipped between rows
    #[arg(long)]
    pub fill: bool,

    /// Keep emitting placeholders after the last row through this opcode (hex ok with '0x'; implies --fill)
    #[arg(long,value_parser=maybe_hex::<u8>)]
    pub fill_end: Option<u8>,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "--no-color", "w65c02"])
    } else {
        Args::parse()
    };
}

pub fn verbose() -> bool { ARGS.verbose }
pub fn no_color() -> bool { ARGS.no_color }
