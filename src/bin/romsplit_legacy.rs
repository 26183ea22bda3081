use std::process;

use romsplit_rs::args::{self, ArgParser, OptSpec};
use romsplit_rs::common::reset_sigpipe;
use romsplit_rs::romsplit::{self, RomSplitConfig, RomSplitError};

const TOOL_NAME: &str = "romsplit-legacy";

const OPTIONS: &[OptSpec] = &[OptSpec::flag('h', "help")];

fn print_usage(app: &str) {
    print!(
        "AMIGA ROM split and endianness correction - create burnable ROMs\n\
         usage: {} <512KiB rom file> [<option>]\n\
         \n\
         option:\n\
         \x20 -h, --help   this help screen\n\n",
        app
    );
}

fn main() {
    reset_sigpipe();

    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let parser = ArgParser::new(argv.iter().cloned());
    let app = match parser.program() {
        "" => TOOL_NAME,
        p => p,
    };

    // Exactly one argument that is not a help flag; anything else is usage.
    if parser.wants_help(true) || parser.param_count() != 1 {
        print_usage(app);
        return;
    }

    let parsed = match args::parse(OPTIONS, argv.iter().cloned()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, RomSplitError::from(e));
            process::exit(1);
        }
    };
    let Some(input) = parsed.positionals.first() else {
        print_usage(app);
        return;
    };

    match romsplit::split_rom(input, &RomSplitConfig::legacy()) {
        Ok(plan) => println!("created {}", plan),
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(1);
        }
    }
}
