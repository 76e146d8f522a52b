use regex::Regex;
use url::Url;

/// Extract the bare domain from a website URL, scheme optional.
/// `https://www.airbnb.com/path` and `airbnb.com` both yield `airbnb.com`.
pub fn extract_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let scheme_re =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap_or_else(|_| Regex::new("^$").unwrap());
    let candidate = if scheme_re.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    let parsed = Url::parse(&candidate).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    if host.is_empty() || host.starts_with('.') {
        return None;
    }
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        assert_eq!(
            extract_domain("https://www.airbnb.com/path"),
            Some("airbnb.com".to_string())
        );
    }

    #[test]
    fn test_bare_domain() {
        assert_eq!(extract_domain("airbnb.com"), Some("airbnb.com".to_string()));
        assert_eq!(extract_domain("www.airbnb.com"), Some("airbnb.com".to_string()));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("   "), None);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(extract_domain("HTTPS://AirBnB.com"), Some("airbnb.com".to_string()));
    }
}
