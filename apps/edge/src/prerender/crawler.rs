/// Substrings identifying automated content fetchers: the generic terms most
/// crawlers self-describe with, plus the named preview fetchers of the major
/// social platforms. Several named entries also contain "bot"; they are kept
/// anyway so each platform is listed explicitly.
const CRAWLER_MARKERS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "crawling",
    "facebookexternalhit",
    "facebookcatalog",
    "twitterbot",
    "linkedinbot",
    "whatsapp",
    "telegrambot",
    "slackbot",
    "discordbot",
    "pinterest",
    "skypeuripreview",
    "embedly",
];

/// Best-effort classification of a `User-Agent` value as an automated
/// crawler. Case-insensitive, unanchored substring search against a fixed
/// allow-list; a missing header classifies as not-a-crawler.
///
/// False negatives get the default SPA experience; false positives get the
/// static preview page, which links back to the full app. Neither outcome
/// blocks anyone, so precision beyond this heuristic buys nothing.
pub fn is_crawler(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    CRAWLER_MARKERS.iter().any(|marker| ua.contains(marker))
}
