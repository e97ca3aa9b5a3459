use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar date sequence generator.
#[derive(Parser)]
#[command(
    name = "dateseq",
    version,
    about = "Generate sequences of calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file. Built-in defaults apply without one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk a number of days from the reference date (negative walks backward).
    Steps(StepsArgs),
    /// Every day between the reference date and an explicit bound.
    Range(RangeArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args, Clone, Default)]
pub struct SequenceArgs {
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Count weekends, overriding the config file.
    #[arg(long, conflicts_with = "no_weekends")]
    pub weekends: bool,

    /// Skip Saturdays and Sundays, overriding the config file.
    #[arg(long)]
    pub no_weekends: bool,

    /// Date to leave out (YYYY-MM-DD). Repeatable; adds to the config list.
    #[arg(short, long = "exclude", value_name = "DATE")]
    pub exclude: Vec<String>,

    /// Sort order: asc or desc.
    #[arg(long)]
    pub order: Option<String>,

    /// strftime layout for each printed date, e.g. "%a %Y-%m-%d".
    #[arg(short, long)]
    pub format: Option<String>,

    /// Remove Saturdays and Sundays from the generated dates.
    #[arg(long)]
    pub drop_weekends: bool,
}

/// Arguments for the `steps` subcommand.
#[derive(clap::Args, Clone)]
pub struct StepsArgs {
    /// Number of days to generate.
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Put back the weekends skipped by --no-weekends between Friday and Monday.
    #[arg(long, conflicts_with = "drop_weekends")]
    pub fill_weekends: bool,

    #[command(flatten)]
    pub common: SequenceArgs,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Start of the range (YYYY-MM-DD).
    #[arg(long, required_unless_present = "to")]
    pub from: Option<String>,

    /// End of the range (YYYY-MM-DD). With --from as well, --reference is ignored.
    #[arg(long)]
    pub to: Option<String>,

    #[command(flatten)]
    pub common: SequenceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_steps_parse() {
        let cli = Cli::try_parse_from(["dateseq", "steps", "-5", "--no-weekends"]).unwrap();
        match cli.command {
            Command::Steps(args) => {
                assert_eq!(args.n, -5);
                assert!(args.common.no_weekends);
            }
            Command::Range(_) => panic!("expected steps"),
        }
    }

    #[test]
    fn range_requires_a_bound() {
        assert!(Cli::try_parse_from(["dateseq", "range"]).is_err());
        assert!(Cli::try_parse_from(["dateseq", "range", "--to", "2006-01-04"]).is_ok());
    }

    #[test]
    fn fill_weekends_is_steps_only() {
        let cli = Cli::try_parse_from(["dateseq", "steps", "6", "--no-weekends", "--fill-weekends"])
            .unwrap();
        match cli.command {
            Command::Steps(args) => assert!(args.fill_weekends),
            Command::Range(_) => panic!("expected steps"),
        }
        assert!(Cli::try_parse_from(["dateseq", "range", "--to", "2006-01-04", "--fill-weekends"]).is_err());
        assert!(
            Cli::try_parse_from(["dateseq", "steps", "3", "--fill-weekends", "--drop-weekends"]).is_err()
        );
    }

    #[test]
    fn weekend_flags_conflict() {
        let parsed = Cli::try_parse_from(["dateseq", "steps", "3", "--weekends", "--no-weekends"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn exclude_is_repeatable() {
        let cli = Cli::try_parse_from([
            "dateseq", "-vv", "steps", "3", "-e", "2006-01-01", "--exclude", "2006-01-02",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Steps(args) => {
                assert_eq!(args.common.exclude, ["2006-01-01", "2006-01-02"]);
            }
            Command::Range(_) => panic!("expected steps"),
        }
    }
}
