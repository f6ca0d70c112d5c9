//! Value objects - immutable types that represent domain concepts

mod date_range;
mod month;
mod page;

pub use date_range::{parse_day, DateRange};
pub use month::MonthKey;
pub use page::{Page, PageRequest};
