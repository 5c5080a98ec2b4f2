//! Investment amount store.

/// Holds the amount the user intends to invest. Defaults to 0.
///
/// No validation happens here: negative and NaN values are stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvestmentStore {
    value: f64,
}

impl InvestmentStore {
    pub fn get(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }
}

/// Coerce the investment input box text into an amount.
///
/// Uses the longest numeric prefix of the trimmed text, so `"2500abc"` is
/// 2500. Empty or unparsable text is 0.
pub fn parse_investment_input(raw: &str) -> f64 {
    let text = raw.trim_start();
    let candidate_len = text
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();

    (1..=candidate_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}
