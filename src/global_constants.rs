#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "outreach-page";
pub const DEFAULT_PAGE_TITLE: &str = "Life Aboard the International Space Station";

pub const NASA_IMAGES_API_URL: &str = "https://images-api.nasa.gov";
pub const NASA_IMAGE_MEDIA_TYPE: &str = "image";
pub const NASA_LIBRARY_SEARCH_URL: &str = "https://images.nasa.gov/search";

pub const DEFAULT_GALLERY_LIMIT: usize = 8;
pub const DEFAULT_ASSET_FETCH_CONCURRENCY: usize = 4;

pub const CUPOLA_GALLERY_MOUNT_ID: &str = "cupola-gallery";
pub const CUPOLA_GALLERY_QUERY: &str = "cupola international space station";
pub const CUPOLA_GALLERY_HEADING: &str = "The View from the Cupola";
pub const NBL_GALLERY_MOUNT_ID: &str = "nbl-gallery";
pub const NBL_GALLERY_QUERY: &str = "Neutral Buoyancy Laboratory";
pub const NBL_GALLERY_HEADING: &str = "Training at the Neutral Buoyancy Laboratory";
pub const PAGE_GALLERY_LIMIT: usize = 9;

pub const SPOT_THE_STATION_WIDGET_URL: &str = "https://spotthestation.nasa.gov/widget/index.cfm";
pub const WIDGET_FORM_ID: &str = "sts-form";
pub const WIDGET_FRAME_ID: &str = "sts-frame";
pub const WIDGET_CITY_FIELD_ID: &str = "city";
pub const WIDGET_REGION_FIELD_ID: &str = "region";
pub const WIDGET_COUNTRY_FIELD_ID: &str = "country";
pub const DEFAULT_WIDGET_CITY: &str = "New York";
pub const DEFAULT_WIDGET_REGION: &str = "New_York";
pub const DEFAULT_WIDGET_COUNTRY: &str = "United_States";

pub const TILT_VIEWPORT_ID: &str = "tilt-viewport";
pub const DEFAULT_MAX_TILT_DEGREES: f64 = 8.0;

pub const GLOBE_MOUNT_ID: &str = "globe-viewer";
pub const GLOBE_RESET_BUTTON_ID: &str = "globe-reset";
pub const DEFAULT_GLOBE_IMAGERY_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_GLOBE_IMAGERY_CREDIT: &str = "© OpenStreetMap contributors";
pub const DEFAULT_GLOBE_MARKER_NAME: &str = "NASA Johnson Space Center";
pub const DEFAULT_GLOBE_LONGITUDE: f64 = -95.0930;
pub const DEFAULT_GLOBE_LATITUDE: f64 = 29.5593;
pub const DEFAULT_GLOBE_CAMERA_HEIGHT_METERS: f64 = 2_000_000.0;
pub const DEFAULT_GLOBE_RESET_FLIGHT_SECONDS: f64 = 2.0;

pub const NOTICE_LOADING_PREFIX: &str = "Loading “";
pub const NOTICE_LOADING_SUFFIX: &str = "” images from NASA…";
pub const NOTICE_NO_RESULTS_PREFIX: &str = "No results found for ";
pub const NOTICE_API_UNREACHABLE: &str = "Could not contact the NASA Images API. Please try again.";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "index.html";
