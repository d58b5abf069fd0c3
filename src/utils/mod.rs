pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_total;
pub use time::{elapsed, format_hhmm, format_timestamp, parse_clock_time};
