//! Hostname normalization for values supplied by users or the environment.

/// Reduces `input` to a bare, lowercase ASCII hostname.
///
/// Accepts either a hostname (`ramsay.example.com`, optionally with `:port`)
/// or a full page URL (`https://ramsay.example.com/app`). Both forms go
/// through the same URL host parser, so case, IDNA and port validation agree.
/// Returns `None` when nothing usable remains.
pub fn normalize_hostname(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if trimmed.contains("://") {
        url::Url::parse(trimmed)
    } else {
        url::Url::parse(&format!("http://{trimmed}"))
    }
    .ok()?;

    let host = parsed.host_str()?.trim_end_matches('.');
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hostname() {
        assert_eq!(
            normalize_hostname("ramsay.cloud-tmp.physicsx.ai").as_deref(),
            Some("ramsay.cloud-tmp.physicsx.ai")
        );
        assert_eq!(
            normalize_hostname("  ramsay.example.com\n").as_deref(),
            Some("ramsay.example.com")
        );
    }

    #[test]
    fn strips_port_and_root_dot() {
        assert_eq!(
            normalize_hostname("ramsay.example.com:8443").as_deref(),
            Some("ramsay.example.com")
        );
        assert_eq!(
            normalize_hostname("ramsay.example.com.").as_deref(),
            Some("ramsay.example.com")
        );
    }

    #[test]
    fn host_from_page_url() {
        assert_eq!(
            normalize_hostname("https://demo-dev-kubeflow.cloud-tmp.physicsx.ai/_/pipelines/?ns=x")
                .as_deref(),
            Some("demo-dev-kubeflow.cloud-tmp.physicsx.ai")
        );
        assert_eq!(
            normalize_hostname("http://localhost:3000/").as_deref(),
            Some("localhost")
        );
    }

    #[test]
    fn bare_and_url_forms_agree() {
        let bare = normalize_hostname("RAMSAY.Example.com");
        let url = normalize_hostname("https://RAMSAY.Example.com/");
        assert_eq!(bare.as_deref(), Some("ramsay.example.com"));
        assert_eq!(bare, url);
        assert_eq!(
            normalize_hostname("Bücher.example.com"),
            normalize_hostname("https://bücher.example.com/")
        );
        assert_eq!(
            normalize_hostname("bücher.example.com").as_deref(),
            Some("xn--bcher-kva.example.com")
        );
    }

    #[test]
    fn bare_hostname_with_path() {
        assert_eq!(
            normalize_hostname("ramsay.example.com/dashboard").as_deref(),
            Some("ramsay.example.com")
        );
    }

    #[test]
    fn invalid_port_rejected() {
        assert_eq!(normalize_hostname("ramsay.example.com:abc"), None);
        assert_eq!(normalize_hostname("https://ramsay.example.com:abc/"), None);
    }

    #[test]
    fn empty_or_unusable() {
        assert_eq!(normalize_hostname(""), None);
        assert_eq!(normalize_hostname("   "), None);
        assert_eq!(normalize_hostname("not a url://"), None);
        assert_eq!(normalize_hostname("file:///tmp/x"), None);
    }
}
