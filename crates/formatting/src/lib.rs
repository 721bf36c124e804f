//! # Display formatting
//!
//! Pure, stateless helpers turning stored values into the strings the
//! dashboard shows: integer cents into currency, ISO dates into locale
//! dates, profit rows into chart axis labels, and page counts into
//! pagination links.

pub mod chart;
pub mod currency;
pub mod date;
pub mod error;
pub mod pagination;

pub use chart::{YAxis, generate_y_axis};
pub use currency::format_currency;
pub use date::{Locale, format_date_to_local, format_iso_date_to_local};
pub use error::FormatError;
pub use pagination::{PageLink, generate_pagination};
