//! Same-page anchor link detection.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// "#id", "/#id", "./#id"
static FRAGMENT_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[./]*/?#([^?&#\s]+)").expect("fragment pattern is valid")
});

/// Returns the fragment id an `href` points at when it targets the page at
/// `current`. Links to other paths, hrefs without a fragment, and hrefs that
/// do not resolve return `None`.
pub fn same_page_fragment(href: &str, current: &Url) -> Option<String> {
    let captures = FRAGMENT_HREF.captures(href)?;
    let id = captures.get(1)?.as_str();

    let resolved = current.join(href).ok()?;
    if resolved.path() != current.path() {
        return None;
    }
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_plain_fragment() {
        let current = page("https://example.org/projects/eco.html");
        assert_eq!(same_page_fragment("#gallery", &current), Some("gallery".into()));
    }

    #[test]
    fn test_root_fragment_only_on_home() {
        let home = page("https://example.org/");
        let other = page("https://example.org/about.html");
        assert_eq!(same_page_fragment("/#projects", &home), Some("projects".into()));
        assert_eq!(same_page_fragment("/#projects", &other), None);
    }

    #[test]
    fn test_dot_slash_fragment_resolves_against_directory() {
        let index = page("https://example.org/blog/");
        let post = page("https://example.org/blog/post.html");
        assert_eq!(same_page_fragment("./#top", &index), Some("top".into()));
        assert_eq!(same_page_fragment("./#top", &post), None);
    }

    #[test]
    fn test_non_fragment_links_fall_through() {
        let current = page("https://example.org/");
        assert_eq!(same_page_fragment("/about.html", &current), None);
        assert_eq!(same_page_fragment("https://other.org/#x", &current), None);
        assert_eq!(same_page_fragment("#", &current), None);
        assert_eq!(same_page_fragment("", &current), None);
    }

    #[test]
    fn test_fragment_stops_at_query_characters() {
        let current = page("https://example.org/");
        assert_eq!(same_page_fragment("#intro?x=1", &current), Some("intro".into()));
    }
}
