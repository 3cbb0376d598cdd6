pub mod time_utils;

pub use time_utils::{now_naive, parse_datetime};
