use crate::site::CONTENT_ROOT;

/// Matches article detail paths of the form `/{CONTENT_ROOT}/{slug}` and
/// extracts the slug.
///
/// Empty segments are filtered before matching, so `/blog/` (trailing slash,
/// no slug) does not match and `//blog//post` does. Segments past the second
/// are ignored — `/blog/post/comments` still yields `post`.
pub fn extract_article_slug(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next()? != CONTENT_ROOT {
        return None;
    }
    segments.next()
}
