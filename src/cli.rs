// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help output.

use crate::model::SortOrder;
use std::path::PathBuf;

/// What the binary was asked to do, parsed from `std::env::args`.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Start the interactive interface.
    Run(CliArgs),
    /// Print the procedure listing to stdout and exit.
    Export(CliArgs),
    /// Print usage and exit.
    Help,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Alternate root for config and data directories.
    pub root: Option<PathBuf>,
    /// Snapshot file given on the command line. Takes precedence over
    /// the configured path and the data-directory default.
    pub snapshot: Option<PathBuf>,
    /// Export only: sort order for the printed listing.
    pub order: Option<SortOrder>,
}

pub fn parse(args: &[String]) -> CliCommand {
    if args.len() > 1 && args[1] == "help" {
        return CliCommand::Help;
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return CliCommand::Help;
    }

    let export = args.len() > 1 && args[1] == "export";
    let mut parsed = CliArgs::default();

    let mut i = if export { 2 } else { 1 };
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 < args.len() {
                    parsed.root = Some(args[i + 1].clone().into());
                    i += 1; // Also consumed the value
                }
            }
            "--order" => {
                if i + 1 < args.len() {
                    parsed.order = Some(SortOrder::from_value(&args[i + 1]));
                    i += 1;
                }
            }
            arg if !arg.starts_with('-') => {
                // Not a flag: treat it as the snapshot path. Only take the first one.
                if parsed.snapshot.is_none() {
                    parsed.snapshot = Some(arg.into());
                }
            }
            _ => { /* Ignore unknown flags */ }
        }
        i += 1;
    }

    if export {
        CliCommand::Export(parsed)
    } else {
        CliCommand::Run(parsed)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Dossier v{} - Fast and elegant browser for EU legislative procedures (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--root <path>] [snapshot.json]     Start interactive TUI",
        binary_name
    );
    println!(
        "    {} export [--order asc|desc]           Print the listing to stdout",
        binary_name
    );
    println!(
        "    {} --help                              Show this help message",
        binary_name
    );
    println!();
    println!("OPTIONS:");
    println!(
        "    <snapshot.json>       Read procedures from this file instead of the data directory."
    );
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXPORT COMMAND:");
    println!(
        "    {} export                              Print every procedure, newest first",
        binary_name
    );
    println!(
        "    {} export --order asc                  Oldest first",
        binary_name
    );
    println!(
        "    {} export > procedures.txt             Save the listing to a file",
        binary_name
    );
    println!(
        "    {} export | grep 'COD'                 Filter output",
        binary_name
    );
    println!();
    println!("KEYBINDINGS:");
    println!("    j/k, Up/Down      Move through the list");
    println!("    PgUp/PgDn         Jump ten entries at a time");
    println!("    f                 Open or close the filter panel");
    println!("    Space/Enter       Toggle the highlighted filter");
    println!("    o                 Flip the sort order");
    println!("    r                 Reset all filters");
    println!("    R                 Reload the snapshot from disk");
    println!("    q                 Quit (Esc closes the filter panel first)");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/dossier");
    println!("    License:    GPL-3.0");
}
