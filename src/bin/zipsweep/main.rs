use clap::{Arg, ArgMatches, Command};
use std::process::exit;
use std::time::SystemTime;
use log::LevelFilter;
use env_logger::Builder;
use core::str::FromStr;
use zipsweep::Parameters;

mod console;
mod errors;

use crate::console::ConsoleProgress;
use crate::errors::Result;
use crate::errors::bail;

/// Main for zipsweep binary - call `run()` and print any error that results, or a completion
/// message if OK
pub fn main() {
    let matches = get_matches();
    let default = String::from("error");
    let verbosity = matches.get_one::<String>("verbosity").unwrap_or(&default);
    let level = LevelFilter::from_str(verbosity).unwrap_or(LevelFilter::Error);
    let mut builder = Builder::from_default_env();
    builder.filter_level(level).init();

    match run(matches) {
        Err(ref e) => {
            eprintln!("{e}");
            for e in e.iter().skip(1) {
                eprintln!("caused by: {e}");
            }

            // The backtrace is generated if env var `RUST_BACKTRACE` is set to `1` or `full`
            if let Some(backtrace) = e.backtrace() {
                eprintln!("backtrace: {backtrace:?}");
            }

            exit(1);
        }
        Ok(count) => {
            println!("Done ({count} files archived)");
            exit(0)
        }
    }
}

fn run(matches: ArgMatches) -> Result<usize> {
    let params = parameters(&matches)?;
    let mut progress = ConsoleProgress::default();
    let summary = zipsweep::archive_old_files(params, SystemTime::now(), &mut progress)?;
    Ok(summary.archived.len())
}

fn parameters(matches: &ArgMatches) -> Result<Parameters> {
    let (Some(destination), Some(source), Some(extension)) = (
        matches.get_one::<String>("destination"),
        matches.get_one::<String>("source"),
        matches.get_one::<String>("type")) else {
        bail!("all arguments except -m are mandatory. use -h to get argument list");
    };
    let min_age_days = matches.get_one::<i64>("min-age").copied().unwrap_or(0);

    Ok(Parameters::new(destination, source, extension, min_age_days))
}

// Parse the command line arguments using clap
fn get_matches() -> ArgMatches {
    app().get_matches()
}

fn app() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::new("verbosity")
            .short('v')
            .long("verbosity")
            .num_args(1)
            .value_name("VERBOSITY_LEVEL")
            .help("Set verbosity level for output (trace, debug, info, warn, default: error)"))
        .arg(Arg::new("destination")
            .short('d')
            .long("destination")
            .required(true)
            .value_name("FOLDER")
            .help("Destination folder for zipped files"))
        .arg(Arg::new("source")
            .short('s')
            .long("source")
            .required(true)
            .value_name("FOLDER")
            .help("Folder containing files to zip"))
        .arg(Arg::new("type")
            .short('t')
            .long("type")
            .required(true)
            .value_name("EXTENSION")
            .help("Extension of files to zip, without the '.'"))
        .arg(Arg::new("min-age")
            .short('m')
            .long("min-age")
            .value_name("DAYS")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true)
            .default_value("0")
            .help("Least modification age in days, more recently modified files are not zipped"))
}
