use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Number and date conventions of the target locale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Locale {
    pub currency_symbol: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    /// chrono format string for the short date form.
    pub date_format: &'static str,
}

impl Locale {
    /// fi-FI: `€ 1 234,50` (no-break space grouping) and `15.3.2024`.
    pub const FI: Locale = Locale {
        currency_symbol: "€",
        decimal_separator: ',',
        group_separator: '\u{a0}',
        date_format: "%-d.%-m.%Y",
    };

    /// Missing amounts render as zero. Cents are rounded half away from zero.
    pub fn format_currency(&self, value: Option<f64>) -> String {
        let value = value.unwrap_or(0.0);
        let cents = (value.abs() * 100.0).round();
        let negative = value < 0.0 && cents > 0.0;
        let cents = cents as u64;

        let digits = (cents / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{} {}{}{}{:02}",
            self.currency_symbol,
            if negative { "-" } else { "" },
            grouped,
            self.decimal_separator,
            cents % 100,
        )
    }

    /// Inverse of [`Locale::format_currency`].
    pub fn parse_amount(&self, formatted: &str) -> Option<f64> {
        let number: String = formatted
            .trim()
            .trim_start_matches(self.currency_symbol)
            .chars()
            .filter(|&c| c != self.group_separator && !c.is_whitespace())
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        number.parse().ok()
    }

    /// Empty or unparsable input yields an empty string.
    pub fn format_date(&self, value: Option<&str>) -> String {
        value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(parse_calendar_date)
            .map(|date| date.format(self.date_format).to_string())
            .unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::FI
    }
}

/// Calendar date of an ISO date or timestamp. Timestamps keep the date of
/// their own offset.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

pub fn format_currency(value: Option<f64>) -> String {
    Locale::FI.format_currency(value)
}

pub fn format_date(value: Option<&str>) -> String {
    Locale::FI.format_date(value)
}
