mod gallery_view;
mod globe_markup_view;
mod notice_view;
mod page_view;

pub use gallery_view::GalleryView;
pub use globe_markup_view::GlobeMarkupView;
pub use notice_view::NoticeView;
pub use page_view::PageView;
