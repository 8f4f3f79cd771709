use std::{
    env,
    io::{self, Read},
    process,
};

use r64_errors::ConversionError;

fn usage() {
    println!(
        r"
USAGE:
r64 [OPTIONS] NUMERAL...

DESCRIPTION:
r64 converts decimal numerals to their correctly-rounded IEEE754 binary64
value, or to 64-bit integers. pass - to read one numeral per line from
stdin.

OPTIONS:
    -h, --help          Display this message
        --as [real|int|nat]
"
    );
}

enum Target {
    Real,
    Integer,
    Natural,
}

/// # Panics
/// if matching was unsuccessful
pub fn handle_options(args: &[String]) -> Option<getopts::Matches> {
    if args.is_empty() {
        usage();
        return None;
    }

    let mut options = getopts::Options::new();
    options.optflag("h", "help", "display this message and exit");
    options.optflag("V", "version", "print version information and exit");
    options.optopt("", "as", "requested output type", "[real|int|nat]");

    let matches = options.parse(args).unwrap_or_else(|e| panic!("{}", e));

    if matches.opt_present("help") {
        usage();
        return None;
    }

    if matches.opt_present("version") {
        println!("r64 {}", env!("CARGO_PKG_VERSION"));
        return None;
    }

    Some(matches)
}

fn make_input(free_matches: &[String]) -> Vec<String> {
    let mut numerals = Vec::new();
    for arg in free_matches {
        if arg == "-" {
            let mut src = String::new();
            assert!(
                io::stdin().read_to_string(&mut src).is_ok(),
                "stdin contains invalid utf-8"
            );
            numerals.extend(src.lines().filter(|l| !l.is_empty()).map(str::to_owned));
        } else {
            numerals.push(arg.clone());
        }
    }
    numerals
}

fn convert(target: &Target, numeral: &str) -> Result<String, ConversionError> {
    let bytes = numeral.as_bytes();
    Ok(match target {
        Target::Real => {
            let value = r64_real::to_real64(bytes)?;
            format!("{} (0x{:016x})", value, value.to_bits())
        }
        Target::Integer => r64_real::to_integer64(bytes)?.to_string(),
        Target::Natural => r64_real::to_natural64(bytes)?.to_string(),
    })
}

fn main() {
    let args: Vec<String> = env::args_os()
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string()
                .unwrap_or_else(|arg| panic!("argument {} is not valid Unicode: {:?}", i, arg))
        })
        .skip(1)
        .collect();

    let matches = match handle_options(&args) {
        Some(matches) => matches,
        None => return,
    };

    let target = match matches.opt_str("as").as_deref() {
        None | Some("real") => Target::Real,
        Some("int") => Target::Integer,
        Some("nat") => Target::Natural,
        Some(other) => panic!("unknown output type {:?}", other),
    };

    let numerals = make_input(&matches.free);
    if numerals.is_empty() {
        usage();
        return;
    }

    let mut failed = false;
    for numeral in &numerals {
        match convert(&target, numeral) {
            Ok(text) => println!("{} = {}", numeral, text),
            Err(e) => {
                eprintln!("{}: {}", numeral, e);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}
