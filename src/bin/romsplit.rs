use std::process;

use clap::{CommandFactory, Parser};

use romsplit_rs::common::reset_sigpipe;
use romsplit_rs::romsplit::{self, RomSplitConfig, TranscodeMode};

const TOOL_NAME: &str = "romsplit";

#[derive(Parser)]
#[command(
    name = "romsplit",
    about = "AMIGA ROM split and endianness correction - create burnable ROMs",
    after_help = "The input must be a raw 256KiB, 512KiB or 1024KiB dump.\n\n\
        Without --split a single byte-swapped image <stem>.<suffix> is written.\n\
        With --split the image is divided into <stem>_low.<suffix> and\n\
        <stem>_high.<suffix> for a pair of 8-bit EPROMs.",
    version
)]
struct Cli {
    /// ROM dump to convert
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<String>,

    /// Split into low and high byte planes (two files)
    #[arg(short = 's', long = "split")]
    split: bool,

    /// Output file suffix (default: bin)
    #[arg(
        short = 'x',
        long = "suffix",
        value_name = "SUFFIX",
        env = "ROMSPLIT_SUFFIX"
    )]
    suffix: Option<String>,

    /// Write the corrected image twice, for a socket wider than the ROM
    #[arg(short = 'w', long = "widen")]
    widen: bool,

    /// Print a diagnostic for the loaded rom and each output file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    reset_sigpipe();

    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        println!();
        process::exit(0);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let Some(file) = cli.file else {
        eprintln!("{}: no input file given", TOOL_NAME);
        eprintln!("Try '{} --help' for more information.", TOOL_NAME);
        process::exit(1);
    };

    let config = RomSplitConfig {
        mode: if cli.split {
            TranscodeMode::Split
        } else {
            TranscodeMode::Merge
        },
        widen: cli.widen,
        suffix: cli.suffix,
        verbose: cli.verbose,
        ..RomSplitConfig::default()
    };

    match romsplit::split_rom(&file, &config) {
        Ok(plan) => println!("created {}", plan),
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(1);
        }
    }
}
