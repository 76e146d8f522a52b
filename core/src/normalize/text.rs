use std::collections::HashSet;

/// String values treated as absent wherever a source field is read.
const BLANK_VALUES: &[&str] = &[
    "unknown",
    "n/a",
    "na",
    "not available",
    "null",
    "none",
    "not found",
    "-",
];

/// True when a raw value carries no information (empty or a known filler).
pub fn is_blank_value(s: &str) -> bool {
    let t = s.trim().to_lowercase();
    t.is_empty() || BLANK_VALUES.contains(&t.as_str())
}

/// Collapse a free-text value to its comparison form: trimmed, internal
/// whitespace collapsed, lowercased, trailing `,`/`;`/`&` runs stripped.
pub fn normalize_text(s: &str) -> String {
    let mut out = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    while out.ends_with(',') || out.ends_with(';') || out.ends_with('&') {
        out.pop();
        out.truncate(out.trim_end().len());
    }
    out
}

/// Word set of an already-normalized string.
pub fn word_set(s: &str) -> HashSet<&str> {
    s.split_whitespace().collect()
}

/// |intersection| / size of the smaller set. Zero when either side is empty.
pub fn word_overlap_ratio(a: &str, b: &str) -> f64 {
    let wa = word_set(a);
    let wb = word_set(b);
    let smaller = wa.len().min(wb.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = wa.intersection(&wb).count();
    shared as f64 / smaller as f64
}

/// Display-only tag formatting. Never used for comparison.
pub fn format_chip_label(s: &str) -> String {
    let spaced = s.replace('&', " & ");
    let mut words: Vec<String> = Vec::new();
    for word in spaced.split_whitespace() {
        if word == "&" {
            words.push(word.to_string());
            continue;
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                words.push(format!("{}{}", first.to_uppercase(), chars.as_str()))
            }
            None => {}
        }
    }
    let mut out = words.join(" ");
    while out.ends_with([',', ';', '&', '.']) {
        out.pop();
        out.truncate(out.trim_end().len());
    }
    out
}
