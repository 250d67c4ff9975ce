//! Highlighting of the navigation entry for the current page.

use url::Url;

/// Which brand and nav entries are marked `active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHighlight {
    /// Brand link and brand grid
    pub brand_active: bool,
    /// One flag per nav link, in input order
    pub links: Vec<bool>,
}

/// True for the site's home page paths.
pub fn is_home(path: &str) -> bool {
    path == "/" || path == "/index.html" || path.ends_with("/index.html")
}

/// Computes the highlight state for `current_path` given the nav link
/// hrefs, each resolved against `origin`.
///
/// On the home page only the brand is highlighted. Elsewhere every link whose
/// path equals the current path is. Hrefs that fail to resolve are left
/// unhighlighted.
pub fn highlight<S: AsRef<str>>(origin: &Url, current_path: &str, hrefs: &[S]) -> NavHighlight {
    let home = is_home(current_path);

    let links = hrefs
        .iter()
        .map(|href| {
            let Ok(url) = origin.join(href.as_ref()) else {
                return false;
            };
            // the home page's "Projects" entry points into the page itself
            if home && url.fragment() == Some("projects") {
                return false;
            }
            !home && url.path() == current_path
        })
        .collect();

    NavHighlight {
        brand_active: home,
        links,
    }
}
