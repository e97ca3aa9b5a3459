//! # dateseq-calendar
//!
//! Sequences of calendar days: step walks from a reference date, inclusive
//! ranges between two dates, weekend filtering, exclusions, sorting and
//! rendering.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str YYYY-MM-DD"] -->|"parse_date()"| B["NaiveDate"]
//!     B -->|"Sequence::at()"| C["Sequence"]
//!     C -->|".steps(n)"| C
//!     C -->|".set_from() / .set_to()"| D["range_between()"]
//!     D --> C
//!     C -->|".exclude() / .sort_*()"| C
//!     C -->|".to_string_list()"| E["Vec of String"]
//!     C -->|".to_formatted_list()"| F["Layout"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use dateseq_calendar::Sequence;
//!
//! let reference = NaiveDate::from_ymd_opt(2006, 1, 1).unwrap();
//!
//! // Inclusive range between the reference date and 2006-01-04.
//! let seq = Sequence::at(reference)
//!     .set_from("2006-01-04")?
//!     .exclude(&["2006-01-02"])?
//!     .sort_descending();
//!
//! assert_eq!(seq.to_string_list(), ["2006-01-04", "2006-01-03", "2006-01-01"]);
//! assert_eq!(seq.to_formatted_list("%a %d %b")?[0], "Wed 04 Jan");
//! # Ok::<(), dateseq_calendar::SequenceError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Strict `YYYY-MM-DD` parsing, rendering, weekend predicate |
//! | `range` | Inclusive ranges, weekend removal and filling |
//! | `format` | Validated strftime layouts |
//! | `sequence` | The chainable `Sequence` builder |
//! | `error` | Error types |

mod date;
mod error;
pub mod format;
mod range;
mod sequence;

pub use date::{CANONICAL_LAYOUT, format_date, is_weekend, parse_date, today};
pub use error::{ErrorKind, SequenceError};
pub use format::Layout;
pub use range::{add_weekends, range_between, remove_weekends, span_days};
pub use sequence::{DEFAULT_MAX_SPAN, Sequence};
