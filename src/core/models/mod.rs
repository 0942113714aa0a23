mod asset_listing;
mod globe_view;
mod page_settings;
mod resolved_card;
mod search_item;
mod tilt;
mod widget_location;

pub use asset_listing::AssetListing;
pub use globe_view::{CameraDestination, CameraState, GlobeViewConfig};
pub use page_settings::{GallerySection, PageSettings};
pub use resolved_card::{build_library_search_url, ResolvedCard};
pub use search_item::{SearchItem, SearchResult};
pub use tilt::{PointerPosition, TiltMapping, TiltStyle, ViewportRect};
pub use widget_location::WidgetLocation;
