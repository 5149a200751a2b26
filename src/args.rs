use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the submit tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Base directory of the assignment checkout
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("submit")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages the foggytcp assignment sources into submit.zip")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Base directory of the assignment checkout (defaults to the current directory)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
