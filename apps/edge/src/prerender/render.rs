//! Response Synthesizer — renders the crawler-facing article preview page.
//!
//! The output is a pure function of (slug, article): no timestamps, no
//! randomness, no request state. Crawlers read the head metadata; a human who
//! lands here (a misclassified browser) gets a readable preview card with
//! links into the full application, so nobody is ever stuck.

use chrono::NaiveDate;

use crate::registry::Article;
use crate::site::{canonical_url, OG_LOCALE, SITE_NAME, SITE_ORIGIN, TWITTER_HANDLE};

/// HTML-escapes a value for text-node and double-quoted attribute contexts.
///
/// Registry content is operator-curated, but it still flows into markup;
/// every interpolated value goes through here so a stray `<` or quote can
/// never break the document.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// First character of each whitespace-separated name token, concatenated as
/// typed: "Emmanuel Dylan" → "ED".
pub fn author_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// `article:published_time` value: the publish date at UTC midnight with
/// millisecond precision, e.g. "2025-10-30T00:00:00.000Z".
fn published_time(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Human-readable publish date, e.g. "October 30, 2025".
fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

const STYLE: &str = "\
:root{color-scheme:light}\
body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;background:#f4f5f7;color:#1a202c}\
.card{max-width:680px;margin:48px auto;padding:40px;background:#fff;border-radius:12px;box-shadow:0 2px 12px rgba(0,0,0,.08)}\
.badge{display:inline-block;padding:4px 12px;border-radius:999px;background:#e8f0fe;color:#1a56db;font-size:13px;font-weight:600;text-transform:uppercase;letter-spacing:.04em}\
h1{margin:16px 0 8px;font-size:28px;line-height:1.25}\
.description{margin:0 0 24px;color:#4a5568;font-size:17px;line-height:1.55}\
.byline{display:flex;align-items:center;gap:12px;margin-bottom:24px}\
.avatar{display:flex;align-items:center;justify-content:center;width:44px;height:44px;border-radius:50%;background:#1a56db;color:#fff;font-weight:700}\
.byline .author{display:block;font-weight:600}\
.byline time{color:#718096;font-size:14px}\
.hero{width:100%;border-radius:8px;margin-bottom:24px}\
.actions{display:flex;gap:12px;flex-wrap:wrap}\
.actions a{padding:12px 20px;border-radius:8px;text-decoration:none;font-weight:600}\
.actions .primary{background:#1a56db;color:#fff}\
.actions .secondary{background:#edf2f7;color:#1a202c}";

/// Renders the complete HTML document served to crawlers for one article.
/// Byte-identical output for identical inputs.
pub fn render_article_page(slug: &str, article: &Article) -> String {
    let canonical = escape_html(&canonical_url(slug));
    let title = escape_html(&article.title);
    let description = escape_html(&article.description);
    let author = escape_html(&article.author);
    let category = escape_html(&article.category);
    let image = escape_html(&article.image);
    let initials = escape_html(&author_initials(&article.author));
    let published = published_time(article.date);
    let date_attr = article.date.format("%Y-%m-%d");
    let date_human = display_date(article.date);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title} | {site}</title>
  <meta name="title" content="{title}" />
  <meta name="description" content="{description}" />
  <meta name="author" content="{author}" />
  <meta name="robots" content="index, follow" />
  <link rel="canonical" href="{canonical}" />
  <meta property="og:type" content="article" />
  <meta property="og:url" content="{canonical}" />
  <meta property="og:title" content="{title}" />
  <meta property="og:description" content="{description}" />
  <meta property="og:image" content="{image}" />
  <meta property="og:image:secure_url" content="{image}" />
  <meta property="og:image:width" content="1200" />
  <meta property="og:image:height" content="630" />
  <meta property="og:image:alt" content="{title}" />
  <meta property="og:site_name" content="{site}" />
  <meta property="og:locale" content="{locale}" />
  <meta property="article:published_time" content="{published}" />
  <meta property="article:author" content="{author}" />
  <meta property="article:section" content="{category}" />
  <meta name="twitter:card" content="summary_large_image" />
  <meta name="twitter:url" content="{canonical}" />
  <meta name="twitter:title" content="{title}" />
  <meta name="twitter:description" content="{description}" />
  <meta name="twitter:image" content="{image}" />
  <meta name="twitter:image:alt" content="{title}" />
  <meta name="twitter:site" content="{twitter}" />
  <meta name="twitter:creator" content="{twitter}" />
  <style>{style}</style>
</head>
<body>
  <main class="card">
    <span class="badge">{category}</span>
    <h1>{title}</h1>
    <p class="description">{description}</p>
    <div class="byline">
      <span class="avatar" aria-hidden="true">{initials}</span>
      <div>
        <span class="author">{author}</span>
        <time datetime="{date_attr}">{date_human}</time>
      </div>
    </div>
    <img class="hero" src="{image}" alt="{title}" />
    <div class="actions">
      <a class="primary" href="{canonical}">Read the full article</a>
      <a class="secondary" href="{origin}/">Build your resume</a>
    </div>
  </main>
</body>
</html>
"#,
        site = SITE_NAME,
        locale = OG_LOCALE,
        twitter = TWITTER_HANDLE,
        origin = SITE_ORIGIN,
        style = STYLE,
    )
}
