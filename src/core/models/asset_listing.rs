use regex::Regex;
use std::sync::LazyLock;

static ORIGINAL_IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(r"(?i)~orig\.(jpg|jpeg|png|tif)$"));
static WEB_IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(r"(?i)\.(jpg|jpeg|png)$"));

fn compile_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("Invalid asset pattern {}: {}", pattern, error))
}

/// Candidate hrefs published for one item, in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetListing {
    pub hrefs: Vec<String>,
}

impl AssetListing {
    pub fn from_hrefs(hrefs: Vec<String>) -> Self {
        Self { hrefs }
    }

    /// Picks the original-resolution image first, then any web image, then whatever is listed
    /// first. An empty listing resolves to an empty string.
    pub fn resolve_preferred_href(&self) -> String {
        let preferred = self
            .first_matching(&ORIGINAL_IMAGE_PATTERN)
            .or_else(|| self.first_matching(&WEB_IMAGE_PATTERN))
            .or_else(|| self.hrefs.first());

        match preferred {
            Some(href) => {
                log::debug!("[ASSET_LISTING] resolved preferred href: {}", href);
                href.clone()
            }
            None => String::new(),
        }
    }

    fn first_matching(&self, pattern: &Regex) -> Option<&String> {
        self.hrefs.iter().find(|href| pattern.is_match(href))
    }
}
