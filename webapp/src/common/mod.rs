pub mod motion;
pub mod scroll;
pub mod storage;
pub mod style;

use chrono::{Datelike, Local};

// used by the footer copyright line
pub fn current_year() -> i32 {
    Local::now().year()
}
