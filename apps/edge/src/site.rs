//! Deployment-time site constants. These describe the deployed product, not
//! the runtime environment, so they are compiled in rather than read from env.

/// Canonical HTTPS origin of the deployed application (no trailing slash).
pub const SITE_ORIGIN: &str = "https://resumeforge.io";

/// First path segment of article detail routes: `/blog/{slug}`.
pub const CONTENT_ROOT: &str = "blog";

/// Display name used for `og:site_name` and page titles.
pub const SITE_NAME: &str = "ResumeForge";

/// Twitter handle for `twitter:site` and `twitter:creator`.
pub const TWITTER_HANDLE: &str = "@resumeforge";

pub const OG_LOCALE: &str = "en_US";

/// The single authoritative URL for an article, used by `og:url`,
/// `twitter:url` and the `rel="canonical"` link.
pub fn canonical_url(slug: &str) -> String {
    format!("{SITE_ORIGIN}/{CONTENT_ROOT}/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url_joins_origin_root_and_slug() {
        assert_eq!(
            canonical_url("my-first-post"),
            "https://resumeforge.io/blog/my-first-post"
        );
    }

    #[test]
    fn test_site_origin_has_no_trailing_slash() {
        assert!(!SITE_ORIGIN.ends_with('/'));
    }
}
