//! Display formatting for currency and date inputs
//!
//! Currency is shown with two fractional digits and a comma separator
//! (`1234,50`) and sent to the backend as a plain number. Dates are shown as
//! `dd/mm/yyyy` and exchanged as ISO `yyyy-mm-dd`.

use chrono::{NaiveDate, Utc};

use crate::error::{Error, Result};

const DISPLAY_DATE: &str = "%d/%m/%Y";
const ISO_DATE: &str = "%Y-%m-%d";

/// Normalize free-form currency input to `<digits>,<two digits>`.
///
/// Everything but digits and commas is dropped. The first comma separates
/// the decimals and a later comma ends the number. Input without any digit
/// formats as `0,00`.
///
/// ```
/// use equipamentos::format::format_currency_input;
///
/// assert_eq!(format_currency_input("R$ 1.234,5"), "1234,50");
/// assert_eq!(format_currency_input(""), "0,00");
/// assert_eq!(format_currency_input("1234,50"), "1234,50");
/// ```
pub fn format_currency_input(input: &str) -> String {
    format_currency(parse_currency_input(input))
}

/// Numeric value of free-form currency input, as [`format_currency_input`] reads it.
pub fn parse_currency_input(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }

    let decimal = cleaned.replacen(',', ".", 1);
    let number = decimal.split(',').next().unwrap_or_default();

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Render a stored value with two decimals and a comma separator
pub fn format_currency(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Render a date for display. `None` (no date selected) renders empty.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_DATE).to_string())
        .unwrap_or_default()
}

/// Parse a date typed as `dd/mm/yyyy` or `yyyy-mm-dd`. Blank input means no date.
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, DISPLAY_DATE)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE))
        .map(Some)
        .map_err(|_| Error::invalid_input(format!("invalid date: {}", trimmed)))
}

/// The ISO `yyyy-mm-dd` form used on the wire
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Current UTC date, the default for new date fields
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
