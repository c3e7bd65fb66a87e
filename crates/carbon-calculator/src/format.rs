//! Locale-aware number and currency formatting for display.
//!
//! This is a thin presentation helper. The contract: a value and a decimal
//! count in, a string with exactly that many fractional digits out, using
//! the locale's grouping and decimal symbols.
//!
//! ```text
//! pt-BR: 1234.5 (2) -> "1.234,50"     currency -> "R$ 1.234,50"
//! en-US: 1234.5 (2) -> "1,234.50"     currency -> "$1,234.50"
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale a [`Decimal`] can hold.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Separators and currency symbol for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits.
    pub group_separator: char,
    /// Symbol written before currency amounts.
    pub currency_symbol: &'static str,
    /// Written between the currency symbol and the amount.
    pub currency_spacing: &'static str,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl NumberLocale {
    /// Brazilian Portuguese: `1.234,56`, Brazilian real.
    pub const fn pt_br() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            currency_symbol: "R$",
            currency_spacing: " ",
        }
    }

    /// US English: `1,234.56`, US dollar.
    pub const fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            currency_symbol: "$",
            currency_spacing: "",
        }
    }

    /// Resolve a BCP 47 tag such as `"pt-BR"`. Case and `_`/`-` are ignored.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Some(Self::pt_br()),
            "en-us" | "en" => Some(Self::en_us()),
            _ => None,
        }
    }

    /// Format `value` with exactly `decimals` fractional digits.
    ///
    /// Ties round half away from zero, as [`format_decimal`](Self::format_decimal)
    /// does. NaN and infinities are written as `NaN`, `∞`, and `-∞`.
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
        }

        // Values or scales outside Decimal's range fall back to float formatting.
        let places = u32::try_from(decimals)
            .ok()
            .filter(|places| *places <= MAX_DECIMAL_SCALE);
        if let (Some(decimal), Some(places)) = (Decimal::from_f64(value), places) {
            return self.format_decimal(decimal, places);
        }
        let plain = format!("{:.*}", decimals, value.abs());
        self.localize(&plain, value < 0.0 && has_nonzero_digit(&plain))
    }

    /// Format a [`Decimal`] with exactly `decimals` fractional digits,
    /// rounding half away from zero.
    pub fn format_decimal(&self, value: Decimal, decimals: u32) -> String {
        let mut rounded =
            value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(decimals);
        let plain = rounded.abs().to_string();
        self.localize(&plain, rounded.is_sign_negative() && !rounded.is_zero())
    }

    /// Format a currency amount with two decimals and the currency symbol.
    pub fn format_currency(&self, value: Decimal) -> String {
        let amount = self.format_decimal(value.abs(), 2);
        let sign = if value.is_sign_negative() && !value.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{}{amount}",
            self.currency_symbol, self.currency_spacing
        )
    }

    /// Rewrite a plain `1234.56` rendering with this locale's symbols.
    fn localize(&self, plain: &str, negative: bool) -> String {
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain, ""));

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.group_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Insert `separator` between groups of three digits, counted from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .filter_map(|chunk| core::str::from_utf8(chunk).ok())
        .collect();
    let mut buf = [0; 4];
    let separator: &str = separator.encode_utf8(&mut buf);
    groups.join(separator)
}

fn has_nonzero_digit(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'1'..=b'9'))
}
