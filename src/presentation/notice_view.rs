use askama::Template;

use crate::global_constants;

/// Status text shown inside a gallery mount instead of cards.
#[derive(Template, Debug, Clone, PartialEq)]
#[template(path = "notice.html")]
pub struct NoticeView {
    message: String,
}

impl NoticeView {
    pub fn loading(query: &str) -> Self {
        Self {
            message: format!(
                "{}{}{}",
                global_constants::NOTICE_LOADING_PREFIX,
                query,
                global_constants::NOTICE_LOADING_SUFFIX
            ),
        }
    }

    pub fn no_results(query: &str) -> Self {
        Self {
            message: format!("{}{}.", global_constants::NOTICE_NO_RESULTS_PREFIX, query),
        }
    }

    pub fn api_unreachable() -> Self {
        Self {
            message: global_constants::NOTICE_API_UNREACHABLE.to_string(),
        }
    }

    pub fn render_markup(&self) -> String {
        self.render().unwrap_or_else(|error| {
            log::error!("[NOTICE_VIEW] Failed to render notice: {}", error);
            format!("<div class=\"notice\">{}</div>", global_constants::NOTICE_API_UNREACHABLE)
        })
    }
}
