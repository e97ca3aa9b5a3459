use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use dateseq_calendar::{Sequence, parse_date};

use crate::cli::{RangeArgs, StepsArgs};
use crate::config::SequenceToml;
use crate::convert::{self, Order, Settings};

/// Run the `steps` subcommand and return the rendered lines.
pub fn steps(args: &StepsArgs, config: &SequenceToml) -> Result<Vec<String>> {
    let settings = convert::resolve_settings(config, &args.common)?;
    info!(
        reference = %settings.reference,
        n = args.n,
        include_weekends = settings.include_weekends,
        "generating step sequence"
    );

    let seq = convert::build_sequence(&settings, settings.reference)
        .steps(args.n)
        .with_context(|| format!("failed to generate {} steps", args.n))?;
    // Filling runs before exclusions so an excluded weekend day stays out.
    let seq = if args.fill_weekends {
        seq.fill_weekends()
    } else {
        seq
    };
    finish(seq, &settings)
}

/// Run the `range` subcommand and return the rendered lines.
pub fn range(args: &RangeArgs, config: &SequenceToml) -> Result<Vec<String>> {
    let settings = convert::resolve_settings(config, &args.common)?;

    let seq = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => {
            if settings.reference_given {
                warn!("--reference is ignored when both --from and --to are given");
            }
            let start = parse_date(from).with_context(|| format!("invalid --from {from:?}"))?;
            info!(from, to, "generating range sequence");
            // --from stands in as the anchor, so the sequence reports it as
            // `reference()` and leaves `from()` unset.
            convert::build_sequence(&settings, start)
                .set_to(to)
                .with_context(|| format!("failed to build range {from}..{to}"))?
        }
        (Some(from), None) => {
            info!(from, reference = %settings.reference, "generating range sequence");
            convert::build_sequence(&settings, settings.reference)
                .set_from(from)
                .with_context(|| format!("failed to build range from {from}"))?
        }
        (None, Some(to)) => {
            info!(to, reference = %settings.reference, "generating range sequence");
            convert::build_sequence(&settings, settings.reference)
                .set_to(to)
                .with_context(|| format!("failed to build range to {to}"))?
        }
        (None, None) => anyhow::bail!("range needs --from, --to or both"),
    };

    finish(seq, &settings)
}

/// Applies weekend removal, exclusions and ordering, then renders the dates.
fn finish(seq: Sequence, settings: &Settings) -> Result<Vec<String>> {
    let seq = if settings.drop_weekends {
        seq.drop_weekends()
    } else {
        seq
    };
    let seq = seq
        .exclude(&settings.exclude)
        .context("invalid excluded date")?;
    let seq = match settings.order {
        Order::Ascending => seq.sort_ascending(),
        Order::Descending => seq.sort_descending(),
    };
    info!(
        n = seq.len(),
        n_excluded = seq.excluded().len(),
        "sequence ready"
    );

    match settings.format.as_deref() {
        Some(layout) => seq
            .to_formatted_list(layout)
            .context("failed to render dates"),
        None => Ok(seq.to_string_list()),
    }
}

/// Writes one line per date to stdout.
pub fn print_lines(lines: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}").context("failed to write output")?;
    }
    out.flush().context("failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SequenceArgs;

    fn common(reference: &str) -> SequenceArgs {
        SequenceArgs {
            reference: Some(reference.to_string()),
            ..SequenceArgs::default()
        }
    }

    fn range_args(from: Option<&str>, to: Option<&str>) -> RangeArgs {
        RangeArgs {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            common: common("2006-01-01"),
        }
    }

    #[test]
    fn steps_without_weekends() {
        let args = StepsArgs {
            n: 6,
            fill_weekends: false,
            common: SequenceArgs {
                no_weekends: true,
                ..common("2018-01-01")
            },
        };
        let lines = steps(&args, &SequenceToml::default()).unwrap();
        assert_eq!(
            lines,
            [
                "2018-01-01",
                "2018-01-02",
                "2018-01-03",
                "2018-01-04",
                "2018-01-05",
                "2018-01-08",
            ]
        );
    }

    #[test]
    fn steps_fill_weekends_restores_skipped_days() {
        let plain = StepsArgs {
            n: 6,
            fill_weekends: false,
            common: SequenceArgs {
                no_weekends: true,
                ..common("2018-01-01")
            },
        };
        let filled = StepsArgs {
            fill_weekends: true,
            ..plain.clone()
        };
        let config = SequenceToml::default();
        let plain = steps(&plain, &config).unwrap();
        let filled = steps(&filled, &config).unwrap();
        assert_ne!(plain, filled);
        assert_eq!(
            filled,
            [
                "2018-01-01",
                "2018-01-02",
                "2018-01-03",
                "2018-01-04",
                "2018-01-05",
                "2018-01-06",
                "2018-01-07",
                "2018-01-08",
            ]
        );
    }

    #[test]
    fn filled_weekend_day_can_still_be_excluded() {
        let args = StepsArgs {
            n: 6,
            fill_weekends: true,
            common: SequenceArgs {
                no_weekends: true,
                exclude: vec!["2018-01-06".to_string()],
                ..common("2018-01-01")
            },
        };
        let lines = steps(&args, &SequenceToml::default()).unwrap();
        assert_eq!(lines.len(), 7);
        assert!(!lines.contains(&"2018-01-06".to_string()));
        assert!(lines.contains(&"2018-01-07".to_string()));
    }

    #[test]
    fn steps_drop_weekends_after_counting_them() {
        let args = StepsArgs {
            n: 7,
            fill_weekends: false,
            common: SequenceArgs {
                drop_weekends: true,
                ..common("2018-01-01")
            },
        };
        let lines = steps(&args, &SequenceToml::default()).unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.last().map(String::as_str), Some("2018-01-05"));
    }

    #[test]
    fn steps_descending_with_format_and_exclusion() {
        let config = SequenceToml {
            order: "desc".to_string(),
            format: Some("%a %d".to_string()),
            exclude: vec!["2006-01-02".to_string()],
            ..SequenceToml::default()
        };
        let args = StepsArgs {
            n: -3,
            fill_weekends: false,
            common: common("2006-01-03"),
        };
        assert_eq!(steps(&args, &config).unwrap(), ["Tue 03", "Sun 01"]);
    }

    #[test]
    fn steps_over_limit_fails() {
        let config = SequenceToml {
            max_span: 2,
            ..SequenceToml::default()
        };
        let args = StepsArgs {
            n: 3,
            fill_weekends: false,
            common: common("2006-01-01"),
        };
        let err = steps(&args, &config).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the limit"));
    }

    #[test]
    fn range_from_reference() {
        let lines = range(&range_args(Some("2006-01-04"), None), &SequenceToml::default()).unwrap();
        assert_eq!(
            lines,
            ["2006-01-01", "2006-01-02", "2006-01-03", "2006-01-04"]
        );
    }

    #[test]
    fn range_to_reference() {
        let lines = range(&range_args(None, Some("2005-12-30")), &SequenceToml::default()).unwrap();
        assert_eq!(lines, ["2005-12-30", "2005-12-31", "2006-01-01"]);
    }

    #[test]
    fn range_with_both_bounds_ignores_reference() {
        let lines = range(
            &range_args(Some("2010-03-01"), Some("2010-03-03")),
            &SequenceToml::default(),
        )
        .unwrap();
        assert_eq!(lines, ["2010-03-01", "2010-03-02", "2010-03-03"]);
    }

    #[test]
    fn range_drop_weekends() {
        let mut args = range_args(None, Some("2006-01-09"));
        args.common.drop_weekends = true;
        let lines = range(&args, &SequenceToml::default()).unwrap();
        assert_eq!(
            lines,
            [
                "2006-01-02",
                "2006-01-03",
                "2006-01-04",
                "2006-01-05",
                "2006-01-06",
                "2006-01-09",
            ]
        );
    }

    #[test]
    fn range_keeps_weekends_even_when_config_excludes_them() {
        let config = SequenceToml {
            include_weekends: false,
            ..SequenceToml::default()
        };
        let lines = range(&range_args(None, Some("2006-01-07")), &config).unwrap();
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn range_bad_bound() {
        let err = range(&range_args(Some("2006-02-30"), None), &SequenceToml::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid calendar date"));
    }

    #[test]
    fn range_without_bounds_fails() {
        assert!(range(&range_args(None, None), &SequenceToml::default()).is_err());
    }

    #[test]
    fn bad_exclusion_fails() {
        let config = SequenceToml {
            exclude: vec!["tomorrow".to_string()],
            ..SequenceToml::default()
        };
        let args = StepsArgs {
            n: 1,
            fill_weekends: false,
            common: common("2006-01-01"),
        };
        let err = steps(&args, &config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid excluded date"));
    }
}
