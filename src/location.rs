/// Active-tab URL dissection
use url::Url;

/// The active tab's origin and everything after it, captured once at
/// popup-open time. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentLocation {
    /// scheme + host (+ port when non-default)
    pub origin: String,
    /// pathname + query + fragment, verbatim
    pub path: String,
}

/// Derive the current location from the active tab's URL.
///
/// Privileged tabs surface no URL at all and some schemes carry no host;
/// both yield `None`, which makes every navigation action unavailable.
pub fn resolve(tab_url: Option<&str>) -> Option<CurrentLocation> {
    let url = Url::parse(tab_url?).ok()?;
    let host = url.host_str()?;

    // Url::port() is None for the scheme's default port, so defaults drop
    // out of the origin on their own.
    let origin = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };

    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        path.push('#');
        path.push_str(fragment);
    }

    Some(CurrentLocation { origin, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic() {
        let current = resolve(Some("https://x.test/a/b?c=1")).unwrap();

        assert_eq!(current.origin, "https://x.test");
        assert_eq!(current.path, "/a/b?c=1");
    }

    #[test]
    fn test_resolve_preserves_query_and_fragment() {
        let current = resolve(Some("https://b.test/p?q=1#h")).unwrap();

        assert_eq!(current.origin, "https://b.test");
        assert_eq!(current.path, "/p?q=1#h");
    }

    #[test]
    fn test_resolve_bare_origin() {
        let current = resolve(Some("https://example.com")).unwrap();

        assert_eq!(current.origin, "https://example.com");
        assert_eq!(current.path, "/");
    }

    #[test]
    fn test_resolve_keeps_non_default_port() {
        let current = resolve(Some("http://localhost:3000/dashboard")).unwrap();

        assert_eq!(current.origin, "http://localhost:3000");
        assert_eq!(current.path, "/dashboard");
    }

    #[test]
    fn test_resolve_drops_default_port() {
        let current = resolve(Some("https://x.test:443/a")).unwrap();

        assert_eq!(current.origin, "https://x.test");
    }

    #[test]
    fn test_resolve_unavailable() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve(Some("")), None);
        assert_eq!(resolve(Some("not a url")), None);
        assert_eq!(resolve(Some("/relative/only")), None);
    }

    #[test]
    fn test_resolve_hostless_schemes() {
        assert_eq!(resolve(Some("about:blank")), None);
        assert_eq!(resolve(Some("data:text/plain,hi")), None);
    }
}
