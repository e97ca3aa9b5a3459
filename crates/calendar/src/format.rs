//! Caller-supplied date layouts.
//!
//! Layouts use chrono's strftime syntax. The specifiers a date sequence
//! usually needs:
//!
//! | Specifier | Meaning | Example |
//! |-----------|---------|---------|
//! | `%Y` | 4-digit year | `2006` |
//! | `%m` | 2-digit month | `01` |
//! | `%d` | 2-digit day | `02` |
//! | `%a` | abbreviated weekday | `Mon` |
//! | `%A` | full weekday | `Monday` |
//! | `%b` | abbreviated month | `Jan` |
//! | `%B` | full month | `January` |
//! | `%%` | literal `%` | `%` |
//!
//! Every other chrono date specifier is accepted as well. Specifiers that
//! need a time of day or an offset (`%H`, `%z`, ...) are rejected, since
//! sequence entries are plain dates.

use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::error::SequenceError;

/// A validated strftime layout, ready to render dates.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    source: &'a str,
    items: Vec<Item<'a>>,
}

impl<'a> Layout<'a> {
    /// Parses and validates a layout string.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidLayout`] when the layout contains a
    /// malformed or unknown specifier, or one that cannot be rendered from a
    /// date alone.
    pub fn parse(source: &'a str) -> Result<Self, SequenceError> {
        let items: Vec<Item<'a>> = StrftimeItems::new(source).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid(source));
        }
        let layout = Self { source, items };
        // Time and offset specifiers only fail once rendered.
        layout.render(NaiveDate::MIN)?;
        Ok(layout)
    }

    /// Returns the layout string this was parsed from.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Renders a single date.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidLayout`] if chrono refuses to render
    /// the layout for this date.
    pub fn render(&self, date: NaiveDate) -> Result<String, SequenceError> {
        let mut out = String::new();
        write!(out, "{}", date.format_with_items(self.items.iter()))
            .map_err(|_| invalid(self.source))?;
        Ok(out)
    }
}

fn invalid(layout: &str) -> SequenceError {
    SequenceError::InvalidLayout {
        layout: layout.to_string(),
    }
}
