use askama::Template;

use crate::core::models::ResolvedCard;

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryView<'a> {
    cards: &'a [ResolvedCard],
}

impl<'a> GalleryView<'a> {
    pub fn build_from_cards(cards: &'a [ResolvedCard]) -> Self {
        log::debug!("[GALLERY_VIEW] Building gallery with {} cards", cards.len());
        Self { cards }
    }

    pub fn render_markup(&self) -> anyhow::Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, thumbnail: &str, download: &str) -> ResolvedCard {
        ResolvedCard {
            title: title.to_string(),
            thumbnail_url: thumbnail.to_string(),
            download_url: download.to_string(),
            library_search_url: "https://images.nasa.gov/search?q=cupola".to_string(),
        }
    }

    #[test]
    fn test_render_wraps_cards_in_grid_in_order() {
        let cards = vec![
            card("First light", "first~thumb.jpg", "first~orig.jpg"),
            card("Second light", "second~thumb.jpg", "second~orig.jpg"),
        ];

        let markup = GalleryView::build_from_cards(&cards).render_markup().unwrap();

        assert!(markup.starts_with("<div class=\"grid cols-3\">"));
        assert!(markup.trim_end().ends_with("</div>"));
        assert_eq!(markup.matches("<article class=\"card\">").count(), 2);
        assert!(markup.find("First light").unwrap() < markup.find("Second light").unwrap());
    }

    #[test]
    fn test_render_escapes_quotes_in_title() {
        let cards = vec![card("The \"Cupola\" at dawn", "", "")];

        let markup = GalleryView::build_from_cards(&cards).render_markup().unwrap();

        assert!(markup.contains("alt=\"The &quot;Cupola&quot; at dawn\""));
        assert!(!markup.contains("\"Cupola\""));
    }

    #[test]
    fn test_render_card_links_and_lazy_image() {
        let cards = vec![card("Earth", "earth~thumb.jpg", "earth~orig.tif")];

        let markup = GalleryView::build_from_cards(&cards).render_markup().unwrap();

        assert!(markup.contains("loading=\"lazy\""));
        assert!(markup.contains("earth~thumb.jpg"));
        assert!(markup.contains("earth~orig.tif"));
        assert!(markup.contains(">Download</a>"));
        assert!(markup.contains(">Open in NASA Library</a>"));
        assert!(markup.contains("<h3>Earth</h3>"));
    }

    #[test]
    fn test_render_with_no_cards_yields_empty_grid() {
        let markup = GalleryView::build_from_cards(&[]).render_markup().unwrap();

        assert!(!markup.contains("<article"));
    }
}
