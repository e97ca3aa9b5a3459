//! Inclusive day ranges and weekend filtering over date lists.

use chrono::NaiveDate;

use crate::date::is_weekend;

/// Iterates day by day from `start` up to the end of the calendar.
fn days_from(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt())
}

/// Number of calendar days in the inclusive range between `a` and `b`.
pub fn span_days(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs() + 1
}

/// Generates every calendar day between `a` and `b`, inclusive.
///
/// The order of the arguments does not matter: the result always runs from
/// the earlier to the later date, ascending, without duplicates. Equal dates
/// give a single-element sequence.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dateseq_calendar::range_between;
///
/// let a = NaiveDate::from_ymd_opt(2006, 1, 4).unwrap();
/// let b = NaiveDate::from_ymd_opt(2006, 1, 1).unwrap();
/// let days = range_between(a, b);
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[0], b);
/// assert_eq!(days[3], a);
/// ```
pub fn range_between(a: NaiveDate, b: NaiveDate) -> Vec<NaiveDate> {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let len = usize::try_from(span_days(start, end)).unwrap_or(0);
    let mut dates = Vec::with_capacity(len);
    dates.extend(days_from(start).take_while(|d| *d <= end));
    dates
}

/// Returns `dates` without Saturdays and Sundays, keeping the original order.
pub fn remove_weekends(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    dates.iter().copied().filter(|d| !is_weekend(*d)).collect()
}

/// Fills in weekend days missing between consecutive entries.
///
/// Walks `dates` pairwise. Where the days strictly between two neighbours are
/// all weekend days (a Friday followed by the next Monday, say), those days
/// are inserted. Any other gap is left as is, so a list that skips a weekday
/// keeps skipping it.
pub fn add_weekends(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut filled = Vec::with_capacity(dates.len());
    for (i, &date) in dates.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| dates.get(p)).copied();
        // A weekend gap is at most two days wide.
        if let Some(prev) = prev.filter(|p| (2..=3).contains(&(date - *p).num_days())) {
            let gap: Vec<NaiveDate> = days_from(prev)
                .skip(1)
                .take_while(|d| *d < date)
                .collect();
            if gap.iter().all(|d| is_weekend(*d)) {
                filled.extend(gap);
            }
        }
        filled.push(date);
    }
    filled
}
