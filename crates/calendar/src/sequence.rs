//! The chainable date sequence builder.

use chrono::NaiveDate;
use tracing::debug;

use crate::date::{format_date, is_weekend, parse_date, today};
use crate::error::SequenceError;
use crate::format::Layout;
use crate::range::{add_weekends, range_between, remove_weekends, span_days};

/// Default upper bound on the number of days one generation call may produce.
///
/// Roughly one century of days.
pub const DEFAULT_MAX_SPAN: usize = 36_600;

/// A sequence of calendar days built relative to a fixed reference date.
///
/// Every method consumes the sequence and hands back the updated value, so
/// calls chain naturally. Fallible methods return a `Result` and validate
/// everything before assigning, so a failure applies nothing. The error does
/// not carry the consumed value back; keep a clone when you need to continue
/// from the state before a failed call.
///
/// Defaults: weekends included, no bounds, empty, ascending, and a span limit
/// of [`DEFAULT_MAX_SPAN`] days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dateseq_calendar::Sequence;
///
/// let monday = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
/// let seq = Sequence::at(monday).exclude_weekends().steps(6).unwrap();
///
/// assert_eq!(
///     seq.to_string_list(),
///     [
///         "2018-01-01", "2018-01-02", "2018-01-03",
///         "2018-01-04", "2018-01-05", "2018-01-08",
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Anchor date for step generation and the far end of explicit ranges.
    reference: NaiveDate,
    /// Bound set through [`Sequence::set_from`].
    from: Option<NaiveDate>,
    /// Bound set through [`Sequence::set_to`].
    to: Option<NaiveDate>,
    /// Whether Saturdays and Sundays count during step generation.
    include_weekends: bool,
    /// Step count of the last step generation, zero otherwise.
    steps: i64,
    /// Order the dates are currently in.
    ascending: bool,
    /// Upper bound on generated days.
    max_span: usize,
    dates: Vec<NaiveDate>,
    excluded: Vec<NaiveDate>,
}

impl Sequence {
    /// Creates an empty sequence anchored at today's local date.
    ///
    /// The date is captured once here and never refreshed.
    pub fn new() -> Self {
        Self::at(today())
    }

    /// Creates an empty sequence anchored at `reference`.
    pub fn at(reference: NaiveDate) -> Self {
        Self {
            reference,
            from: None,
            to: None,
            include_weekends: true,
            steps: 0,
            ascending: true,
            max_span: DEFAULT_MAX_SPAN,
            dates: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Sets the maximum number of days a generation call may produce.
    pub fn with_max_span(mut self, max_span: usize) -> Self {
        self.max_span = max_span;
        self
    }

    /// Counts Saturdays and Sundays during step generation.
    pub fn include_weekends(mut self) -> Self {
        self.include_weekends = true;
        self
    }

    /// Skips Saturdays and Sundays during step generation.
    pub fn exclude_weekends(mut self) -> Self {
        self.include_weekends = false;
        self
    }

    /// Replaces the dates with `n` qualifying days walked from the reference date.
    ///
    /// A positive `n` walks forward starting at the reference date, a
    /// negative `n` walks backward ending at it, and zero yields an empty
    /// sequence. With weekends excluded, Saturdays and Sundays are passed over
    /// without counting. The result is always in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::StepsOutOfRange`] when `|n|` exceeds the span
    /// limit, or [`SequenceError::DateOverflow`] when the walk runs off the
    /// representable calendar.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn steps(mut self, n: i64) -> Result<Self, SequenceError> {
        self.dates = self.walk(n)?;
        self.steps = n;
        self.ascending = true;
        debug!(len = self.dates.len(), "step sequence generated");
        Ok(self)
    }

    /// Sets the `from` bound and regenerates the range between it and the reference date.
    ///
    /// An empty string leaves the sequence untouched. The range is the raw
    /// calendar range: weekend days are kept whatever the weekend setting,
    /// use [`Sequence::drop_weekends`] to filter them.
    ///
    /// # Errors
    ///
    /// Returns a parse error for a malformed date, or
    /// [`SequenceError::SpanOutOfRange`] when the range is too long.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_from(mut self, from: &str) -> Result<Self, SequenceError> {
        if from.is_empty() {
            return Ok(self);
        }
        let date = parse_date(from)?;
        self.regenerate_range(date)?;
        self.from = Some(date);
        Ok(self)
    }

    /// Sets the `to` bound and regenerates the range between the reference date and it.
    ///
    /// Mirror image of [`Sequence::set_from`].
    ///
    /// # Errors
    ///
    /// Returns a parse error for a malformed date, or
    /// [`SequenceError::SpanOutOfRange`] when the range is too long.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_to(mut self, to: &str) -> Result<Self, SequenceError> {
        if to.is_empty() {
            return Ok(self);
        }
        let date = parse_date(to)?;
        self.regenerate_range(date)?;
        self.to = Some(date);
        Ok(self)
    }

    /// Removes the given `YYYY-MM-DD` dates from the sequence.
    ///
    /// Every entry is parsed before anything changes. Each parsed date is
    /// recorded in [`Sequence::excluded`], matched or not, and its entry is
    /// removed from the dates with the remaining order preserved.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first malformed entry; nothing is
    /// applied in that case.
    pub fn exclude<S: AsRef<str>>(mut self, dates: &[S]) -> Result<Self, SequenceError> {
        let parsed = dates
            .iter()
            .map(|s| parse_date(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for date in parsed {
            self.excluded.push(date);
            if let Some(pos) = self.dates.iter().position(|d| *d == date) {
                self.dates.remove(pos);
                debug!(date = %date, "excluded date removed");
            }
        }
        Ok(self)
    }

    /// Forgets every previously excluded date. The dates are not restored.
    pub fn clear_excluded(mut self) -> Self {
        self.excluded.clear();
        self
    }

    /// Removes Saturdays and Sundays from the current dates.
    pub fn drop_weekends(mut self) -> Self {
        self.dates = remove_weekends(&self.dates);
        self
    }

    /// Inserts weekend days missing between neighbouring weekdays.
    ///
    /// See [`add_weekends`](crate::add_weekends) for the exact rule. Works in
    /// either sort order.
    pub fn fill_weekends(mut self) -> Self {
        if self.ascending {
            self.dates = add_weekends(&self.dates);
        } else {
            self.dates.reverse();
            self.dates = add_weekends(&self.dates);
            self.dates.reverse();
        }
        self
    }

    /// Sorts the dates from earliest to latest.
    pub fn sort_ascending(mut self) -> Self {
        self.dates.sort();
        self.ascending = true;
        self
    }

    /// Sorts the dates from latest to earliest.
    pub fn sort_descending(mut self) -> Self {
        self.dates.sort_by(|a, b| b.cmp(a));
        self.ascending = false;
        self
    }

    /// Returns the reference date.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Returns the lower bound, if one was set.
    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Returns the upper bound, if one was set.
    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Returns `true` when weekends count during step generation.
    pub fn includes_weekends(&self) -> bool {
        self.include_weekends
    }

    /// Returns the step count of the last step generation.
    pub fn step_count(&self) -> i64 {
        self.steps
    }

    /// Returns `true` when the dates are in ascending order.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the span limit.
    pub fn max_span(&self) -> usize {
        self.max_span
    }

    /// Returns the dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns every date passed to [`Sequence::exclude`], in call order.
    pub fn excluded(&self) -> &[NaiveDate] {
        &self.excluded
    }

    /// Returns the number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` when the sequence holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns an owned copy of the dates.
    pub fn to_date_list(&self) -> Vec<NaiveDate> {
        self.dates.clone()
    }

    /// Renders every date as `YYYY-MM-DD`.
    pub fn to_string_list(&self) -> Vec<String> {
        self.dates.iter().map(|d| format_date(*d)).collect()
    }

    /// Renders every date with a strftime `layout`.
    ///
    /// See the [`format`](crate::format) module for the supported specifiers.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidLayout`] when the layout is unusable,
    /// even if the sequence is empty.
    pub fn to_formatted_list(&self, layout: &str) -> Result<Vec<String>, SequenceError> {
        let layout = Layout::parse(layout)?;
        self.dates.iter().map(|d| layout.render(*d)).collect()
    }

    fn qualifies(&self, date: NaiveDate) -> bool {
        self.include_weekends || !is_weekend(date)
    }

    /// Collects `|n|` qualifying days, returned in ascending order.
    fn walk(&self, n: i64) -> Result<Vec<NaiveDate>, SequenceError> {
        let count = usize::try_from(n.unsigned_abs())
            .ok()
            .filter(|c| *c <= self.max_span)
            .ok_or(SequenceError::StepsOutOfRange {
                steps: n,
                max: self.max_span,
            })?;

        let forward = n > 0;
        let advance: fn(&NaiveDate) -> Option<NaiveDate> = if forward {
            NaiveDate::succ_opt
        } else {
            NaiveDate::pred_opt
        };

        let mut dates = Vec::with_capacity(count);
        let mut current = self.reference;
        while dates.len() < count {
            if self.qualifies(current) {
                dates.push(current);
                if dates.len() == count {
                    break;
                }
            }
            current = advance(&current).ok_or(SequenceError::DateOverflow { date: current })?;
        }

        if !forward {
            dates.reverse();
        }
        Ok(dates)
    }

    fn regenerate_range(&mut self, bound: NaiveDate) -> Result<(), SequenceError> {
        let days = span_days(bound, self.reference);
        if days > self.max_span as u64 {
            return Err(SequenceError::SpanOutOfRange {
                days,
                max: self.max_span,
            });
        }
        self.dates = range_between(bound, self.reference);
        self.steps = 0;
        self.ascending = true;
        debug!(len = self.dates.len(), "range sequence generated");
        Ok(())
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
