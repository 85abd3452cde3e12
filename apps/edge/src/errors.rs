use thiserror::Error;

/// Defects in the static article registry, caught while the registry is
/// built at startup. The request path never sees these: a registry that
/// fails validation aborts boot before the listener binds.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("article registry is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("article '{slug}': field '{field}' must not be empty")]
    EmptyField { slug: String, field: &'static str },

    #[error("article '{slug}': date '{value}' is not a valid YYYY-MM-DD date")]
    BadDate { slug: String, value: String },

    #[error("article '{slug}': image '{value}' is not an absolute http(s) URL")]
    BadImageUrl { slug: String, value: String },

    #[error("registry key '{slug}' is not a URL-safe slug")]
    BadSlug { slug: String },
}
