#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail_href: Option<String>,
}

impl SearchItem {
    pub fn build(id: Option<String>, title: Option<String>, thumbnail_href: Option<String>) -> Self {
        Self {
            id: id.filter(|value| !value.is_empty()),
            title: title.filter(|value| !value.is_empty()),
            thumbnail_href: thumbnail_href.filter(|value| !value.is_empty()),
        }
    }

    pub fn display_title<'a>(&'a self, query: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(query)
    }
}

/// Items in the order the search API returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub items: Vec<SearchItem>,
}

impl SearchResult {
    pub fn from_items(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    pub fn first_items(self, limit: usize) -> Vec<SearchItem> {
        self.items.into_iter().take(limit).collect()
    }
}
