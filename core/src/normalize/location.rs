use super::text::normalize_text;

/// Alias table applied after text normalization. Keys are already in
/// normalized form.
const LOCATION_ALIASES: &[(&str, &str)] = &[
    ("us", "united states"),
    ("usa", "united states"),
    ("u.s.", "united states"),
    ("u.s.a.", "united states"),
    ("united states of america", "united states"),
    ("america", "united states"),
    ("uk", "united kingdom"),
    ("u.k.", "united kingdom"),
    ("great britain", "united kingdom"),
    ("britain", "united kingdom"),
    ("uae", "united arab emirates"),
    ("u.a.e.", "united arab emirates"),
    ("nyc", "new york"),
    ("new york city", "new york"),
    ("sf", "san francisco"),
    ("san francisco bay area", "san francisco"),
    ("bay area", "san francisco"),
];

pub fn normalize_location(s: &str) -> String {
    let norm = normalize_text(s);
    for (alias, canonical) in LOCATION_ALIASES {
        if norm == *alias {
            return (*canonical).to_string();
        }
    }
    norm
}
