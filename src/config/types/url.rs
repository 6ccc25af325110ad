//! Site URL composition.
//!
//! Joins the origin of `site.url`, `site.path_prefix` and a page path so that
//! every join point carries exactly one `/`. The path of `site.url` is carried
//! by `path_prefix` alone.

/// Builds site-relative and absolute URLs from the loaded config.
///
/// # Example
/// ```ignore
/// let urls = config.urls();
/// urls.path("blog/post")      // "/portfolio/blog/post"
/// urls.absolute("blog/post")  // "https://example.com/portfolio/blog/post"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    /// Scheme, host and port of the site URL.
    origin: String,
    /// `""` for root, otherwise `/seg[/seg]` without trailing slash.
    prefix: String,
}

impl UrlResolver {
    pub fn new(site_url: &str, prefix: &str) -> Self {
        Self {
            origin: origin_of(site_url),
            prefix: normalize_prefix(prefix),
        }
    }

    /// Normalized path prefix, `/` at root.
    pub fn prefix(&self) -> &str {
        if self.prefix.is_empty() {
            "/"
        } else {
            &self.prefix
        }
    }

    /// Site-relative path for `path`, prefix included.
    pub fn path(&self, path: &str) -> String {
        let path = path.trim().trim_start_matches('/');
        format!("{}/{}", self.prefix, path)
    }

    /// Absolute URL for `path`.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.origin, self.path(path))
    }
}

/// `https://host[:port]` of a site URL.
///
/// Unparseable URLs (already reported by validation) fall back to the input
/// without trailing slashes.
fn origin_of(site_url: &str) -> String {
    match ::url::Url::parse(site_url) {
        Ok(parsed) if parsed.origin().is_tuple() => parsed.origin().ascii_serialization(),
        _ => site_url.trim_end_matches('/').to_string(),
    }
}

/// Collapse a user-written prefix (`"/"`, `"portfolio"`, `"/a/b/"`) to
/// `""` or `/a/b`.
pub fn normalize_prefix(prefix: &str) -> String {
    prefix
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut out, segment| {
            out.push('/');
            out.push_str(segment);
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("portfolio"), "/portfolio");
        assert_eq!(normalize_prefix("/portfolio/"), "/portfolio");
        assert_eq!(normalize_prefix("a//b/"), "/a/b");
    }

    #[test]
    fn test_absolute_root_prefix() {
        let urls = UrlResolver::new("https://tresko.dev", "/");
        assert_eq!(urls.prefix(), "/");
        assert_eq!(urls.absolute("blog/post"), "https://tresko.dev/blog/post");
        assert_eq!(urls.absolute("/blog/post"), "https://tresko.dev/blog/post");
        assert_eq!(urls.absolute(""), "https://tresko.dev/");
    }

    #[test]
    fn test_absolute_never_doubles_slash() {
        let urls = UrlResolver::new("https://tresko.dev/", "/");
        for path in ["about", "/about", "//about", "about/"] {
            let url = urls.absolute(path);
            assert!(!url["https://".len()..].contains("//"), "{url}");
        }
    }

    #[test]
    fn test_with_prefix() {
        let urls = UrlResolver::new("https://example.com", "portfolio");
        assert_eq!(urls.prefix(), "/portfolio");
        assert_eq!(urls.path("social/banner.jpg"), "/portfolio/social/banner.jpg");
        assert_eq!(urls.path(""), "/portfolio/");
        assert_eq!(
            urls.absolute("/posts/hello/"),
            "https://example.com/portfolio/posts/hello/"
        );
    }

    #[test]
    fn test_url_path_not_repeated() {
        let urls = UrlResolver::new("https://example.github.io/my-project", "/my-project");
        assert_eq!(urls.prefix(), "/my-project");
        assert_eq!(
            urls.absolute("blog/post"),
            "https://example.github.io/my-project/blog/post"
        );

        let urls = UrlResolver::new("https://example.com/blog", "blog");
        assert_eq!(urls.absolute("hello"), "https://example.com/blog/hello");
    }

    #[test]
    fn test_origin_keeps_port() {
        let urls = UrlResolver::new("http://localhost:8080/docs", "/docs");
        assert_eq!(urls.absolute("a"), "http://localhost:8080/docs/a");
    }

    #[test]
    fn test_unparseable_url_falls_back() {
        let urls = UrlResolver::new("tresko.dev/", "/");
        assert_eq!(urls.absolute("about"), "tresko.dev/about");
    }
}
