use crate::error::FormatError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display locales the dashboard can render dates in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Locale::EnUs),
            "en-GB" => Ok(Locale::EnGb),
            other => Err(FormatError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Short month, numeric day and year in the locale's order.
pub fn format_date_to_local(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::EnUs => date.format("%b %-d, %Y").to_string(),
        Locale::EnGb => date.format("%-d %b %Y").to_string(),
    }
}

/// Like [`format_date_to_local`], for a `YYYY-MM-DD` string or an RFC 3339 timestamp.
pub fn format_iso_date_to_local(date: &str, locale: Locale) -> Result<String, FormatError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(date).map(|dt| dt.date_naive()))
        .map_err(|_| FormatError::InvalidDate(date.to_string()))?;
    Ok(format_date_to_local(parsed, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_dates_put_the_month_first() {
        assert_eq!(format_iso_date_to_local("2024-08-15", Locale::EnUs).unwrap(), "Aug 15, 2024");
        assert_eq!(format_iso_date_to_local("2024-01-05", Locale::EnUs).unwrap(), "Jan 5, 2024");
    }

    #[test]
    fn gb_dates_put_the_day_first() {
        assert_eq!(format_iso_date_to_local("2024-08-15", Locale::EnGb).unwrap(), "15 Aug 2024");
    }

    #[test]
    fn timestamps_use_their_calendar_date() {
        assert_eq!(
            format_iso_date_to_local("2024-08-15T10:30:00Z", Locale::EnUs).unwrap(),
            "Aug 15, 2024"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            format_iso_date_to_local("15/08/2024", Locale::EnUs),
            Err(FormatError::InvalidDate("15/08/2024".to_string()))
        );
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
