use super::text::is_blank_value;
use regex::Regex;

fn amount_regex() -> Regex {
    Regex::new(r"^([0-9]*\.?[0-9]+)\s*(k|m|b|thousand|million|billion)?$")
        .unwrap_or_else(|_| Regex::new("^$").unwrap())
}

fn scale_for(unit: &str) -> f64 {
    match unit {
        "k" | "thousand" => 1e3,
        "m" | "million" => 1e6,
        "b" | "billion" => 1e9,
        _ => 1.0,
    }
}

/// Parse a monetary amount expressed in free text into whole dollars.
/// Handles "$1.5M", "2 million", "500k", "1,200,000 USD". Ranges keep the
/// lower bound. Returns None when no number is present.
pub fn parse_usd_amount(text: &str) -> Option<u64> {
    if is_blank_value(text) {
        return None;
    }
    let s = text.trim().to_lowercase();
    // Range -> lower bound
    let range_re = Regex::new(r"\s*(?:to|-|—|–)\s*").unwrap_or_else(|_| Regex::new("^$").unwrap());
    let first = range_re.split(&s).next().unwrap_or(&s).trim().to_string();
    let cleaned = first
        .replace(',', "")
        .replace("usd", "")
        .replace('$', "")
        .trim()
        .to_string();

    if let Some(caps) = amount_regex().captures(&cleaned) {
        let num: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return Some((num * scale_for(unit)).round() as u64);
    }

    // Fall back to the first number plus a spelled-out scale anywhere after it
    let num_re = Regex::new(r"([0-9]*\.?[0-9]+)").unwrap_or_else(|_| Regex::new("^$").unwrap());
    let m = num_re.find(&cleaned)?;
    let mut val: f64 = m.as_str().parse().ok()?;
    for (word, scale) in [("billion", 1e9), ("million", 1e6), ("thousand", 1e3)] {
        if cleaned.contains(word) {
            val *= scale;
            break;
        }
    }
    Some(val.round() as u64)
}

/// Parse a percentage from free text. Fractions in (0, 1] without an
/// explicit `%` are scaled by 100.
pub fn parse_percent(text: &str) -> Option<f64> {
    if is_blank_value(text) {
        return None;
    }
    let s = text.trim();
    let re = Regex::new(r"-?\d+(\.\d+)?").unwrap_or_else(|_| Regex::new("^$").unwrap());
    let m = re.find(s)?;
    let mut v: f64 = m.as_str().parse().ok()?;
    if v > 0.0 && v <= 1.0 && !s.contains('%') {
        v *= 100.0;
    }
    // two decimals, which also soaks up float noise from the scaling
    Some((v * 100.0).round() / 100.0)
}
