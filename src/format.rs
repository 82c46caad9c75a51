//! Formatting Utilities
//!
//! Turns raw counts and fractions into display strings and chart rows.

use crate::model::{CategoryDistribution, ChartDatum, DistributionSummary};

/// Maximum fraction digits kept by [`format_number`]
const MAX_FRACTION_DIGITS: usize = 3;

/// Separator conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
    /// Integer digits required before grouping applies
    pub min_grouping_digits: usize,
}

impl NumberLocale {
    pub const EN_US: NumberLocale = NumberLocale {
        group_separator: ',',
        decimal_separator: '.',
        min_grouping_digits: 4,
    };

    /// Spanish leaves four-digit numbers ungrouped ("1234", "12.345")
    pub const ES_ES: NumberLocale = NumberLocale {
        group_separator: '.',
        decimal_separator: ',',
        min_grouping_digits: 5,
    };

    pub const DE_DE: NumberLocale = NumberLocale {
        group_separator: '.',
        decimal_separator: ',',
        min_grouping_digits: 4,
    };

    pub const FR_FR: NumberLocale = NumberLocale {
        group_separator: '\u{202F}',
        decimal_separator: ',',
        min_grouping_digits: 4,
    };

    /// Resolve a BCP-47 tag such as `es-MX` by its primary language.
    /// Unknown languages use `en-US` conventions.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Self::ES_ES,
            "de" | "it" | "nl" | "pt" | "id" => Self::DE_DE,
            "fr" => Self::FR_FR,
            _ => Self::EN_US,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Format a number with locale digit grouping.
///
/// Keeps at most three fraction digits and drops trailing zeros, so
/// `1234.5` renders as `1,234.5` and `1234` as `1,234` under `en-US`.
/// Values that round to zero, including negative zero, render as `0`
/// without a sign.
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let negative = value < 0.0 && (integer != "0" || !fraction.is_empty());

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(integer, locale));
    if !fraction.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Format an item count
pub fn format_count(count: u64, locale: NumberLocale) -> String {
    group_digits(&count.to_string(), locale)
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
    if digits.len() < locale.min_grouping_digits {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(ch);
    }
    out
}

/// Render a `[0, 1]` fraction as a percentage with one decimal, e.g. `12.3%`
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Render a price with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Convert the distribution into chart rows, keeping delivery order
pub fn prepare_chart_data(distribution: &CategoryDistribution) -> Vec<ChartDatum> {
    distribution
        .iter()
        .map(|(name, count)| ChartDatum {
            name: name.to_string(),
            value: count,
        })
        .collect()
}

/// Number of categories and the sum of their counts
pub fn summarize(chart: &[ChartDatum]) -> DistributionSummary {
    DistributionSummary {
        category_count: chart.len(),
        total_items: chart.iter().map(|datum| datum.value).sum(),
    }
}
