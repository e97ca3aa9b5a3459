//! Pure conversion functions: TOML config and CLI flags -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use dateseq_calendar::{Layout, Sequence, parse_date, today};

use crate::cli::SequenceArgs;
use crate::config::SequenceToml;

/// Sort order applied before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Parses a sort order name into the corresponding enum variant.
pub fn parse_order(s: &str) -> Result<Order> {
    match s.to_lowercase().as_str() {
        "asc" | "ascending" => Ok(Order::Ascending),
        "desc" | "descending" => Ok(Order::Descending),
        other => bail!("unknown sort order: {other:?}"),
    }
}

/// Settings resolved from the config file with CLI flags layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reference: NaiveDate,
    pub reference_given: bool,
    pub include_weekends: bool,
    pub order: Order,
    pub format: Option<String>,
    pub max_span: usize,
    pub exclude: Vec<String>,
    pub drop_weekends: bool,
}

/// Merges the `[sequence]` table with the command-line flags.
///
/// Flags win over the file, except for exclusions, which are combined.
pub fn resolve_settings(toml: &SequenceToml, args: &SequenceArgs) -> Result<Settings> {
    let reference = match args.reference.as_deref() {
        Some(s) => parse_date(s).with_context(|| format!("invalid --reference {s:?}"))?,
        None => today(),
    };

    let include_weekends = if args.weekends {
        true
    } else if args.no_weekends {
        false
    } else {
        toml.include_weekends
    };

    let order = parse_order(args.order.as_deref().unwrap_or(&toml.order))?;

    let format = args.format.clone().or_else(|| toml.format.clone());
    if let Some(layout) = format.as_deref() {
        Layout::parse(layout).context("invalid output format")?;
    }

    let exclude = toml
        .exclude
        .iter()
        .chain(&args.exclude)
        .cloned()
        .collect();

    Ok(Settings {
        reference,
        reference_given: args.reference.is_some(),
        include_weekends,
        order,
        format,
        max_span: toml.max_span,
        exclude,
        drop_weekends: args.drop_weekends,
    })
}

/// Builds an empty, configured [`Sequence`] anchored at `reference`.
pub fn build_sequence(settings: &Settings, reference: NaiveDate) -> Sequence {
    let seq = Sequence::at(reference).with_max_span(settings.max_span);
    if settings.include_weekends {
        seq.include_weekends()
    } else {
        seq.exclude_weekends()
    }
}
