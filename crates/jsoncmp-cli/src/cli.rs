use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jsoncmp",
    about = "Structural comparison of two JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the two documents named in a configuration file
    Run(RunArgs),
    /// Compare two documents given on the command line
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct RunArgs {
    #[arg(short, long, default_value = "config.yml")]
    pub config: PathBuf,
    /// Override the configured CSV report path
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Skip the CSV report
    #[arg(long, conflicts_with = "csv")]
    pub no_csv: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Also write a CSV report to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["jsoncmp", "run"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("config.yml"));
            assert!(args.csv.is_none());
            assert!(!args.no_csv);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_run_with_config() {
        let cli = Cli::try_parse_from(["jsoncmp", "run", "-c", "cmp.toml", "--csv", "out.csv"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("cmp.toml"));
            assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn csv_and_no_csv_conflict() {
        assert!(Cli::try_parse_from(["jsoncmp", "run", "--csv", "a.csv", "--no-csv"]).is_err());
    }

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["jsoncmp", "diff", "a.json", "b.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("a.json"));
            assert_eq!(args.right, PathBuf::from("b.json"));
            assert!(args.csv.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn diff_requires_two_documents() {
        assert!(Cli::try_parse_from(["jsoncmp", "diff", "a.json"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["jsoncmp", "--verbose", "run"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["jsoncmp", "diff", "a.json", "b.json", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
