use url::Url;

/// Resolve a listing or image reference against the site origin.
///
/// Absolute `http(s)` references pass through untouched; everything else is
/// treated as a path on the origin, with or without its leading slash.
pub fn absolute_url(base: &Url, reference: &str) -> String {
    let trimmed = reference.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return trimmed.to_string();
    }
    let path = format!("/{}", trimmed.trim_start_matches('/'));
    match base.join(&path) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base.origin().ascii_serialization(), path),
    }
}

#[cfg(test)]
mod tests {
    use super::absolute_url;
    use url::Url;

    fn base() -> Url {
        Url::parse("https://www.boca.gov.tw").unwrap()
    }

    #[test]
    fn absolute_references_pass_through() {
        assert_eq!(
            absolute_url(&base(), "https://example.org/x?y=1"),
            "https://example.org/x?y=1"
        );
    }

    #[test]
    fn root_relative_and_bare_paths_join_the_origin() {
        assert_eq!(
            absolute_url(&base(), "/cp-181-123-abcde-2.html"),
            "https://www.boca.gov.tw/cp-181-123-abcde-2.html"
        );
        assert_eq!(
            absolute_url(&base(), "cp-181-123-abcde-2.html"),
            "https://www.boca.gov.tw/cp-181-123-abcde-2.html"
        );
    }

    #[test]
    fn base_path_is_ignored_for_relative_references() {
        let base = Url::parse("https://www.boca.gov.tw/sp-foaf-1.html").unwrap();
        assert_eq!(
            absolute_url(&base, "public/Data/flow.jpg"),
            "https://www.boca.gov.tw/public/Data/flow.jpg"
        );
    }
}
