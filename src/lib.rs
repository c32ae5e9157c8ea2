pub mod banner;
pub mod config;
pub mod error;
pub mod holiday;
pub mod log;
pub mod tagline;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use holiday::{HolidayLookup, UsHolidays};
pub use log::Kind;
