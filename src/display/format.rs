//! Formatting helpers for terminal output
//!
//! Amounts are plain reals in the engine; the currency symbol is a display
//! preference only.

/// Format an amount with a currency symbol and thousands separators
///
/// Rounds to whole pence/cents: `format_amount(-1234.5, "£")` gives
/// `-£1,234.50`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a user-entered amount such as `4500`, `4,500.00` or `£4500`
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    let (mut negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    // Currency symbol, then an optional sign: `£-250`
    let mut rest = rest.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.' && c != '-');
    if let Some(unsigned) = rest.strip_prefix('-') {
        if negative {
            return Err(format!("Invalid amount: {}", input));
        }
        negative = true;
        rest = unsigned;
    }
    let cleaned: String = rest
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("Invalid amount: {}", input))?;
    if !value.is_finite() {
        return Err(format!("Invalid amount: {}", input));
    }
    Ok(if negative { -value } else { value })
}

/// Parse a percentage such as `5%`, `5` or `0.05%` into a fraction
pub fn parse_percentage(input: &str) -> Result<f64, String> {
    let trimmed = input.trim().trim_end_matches('%');
    let value: f64 = trimmed
        .trim()
        .parse()
        .map_err(|_| format!("Invalid percentage: {}", input))?;
    Ok(value / 100.0)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Simple horizontal bar, `width` cells at `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
