mod in_memory_page_document;
mod nasa_images_provider;

pub use in_memory_page_document::InMemoryPageDocument;
pub use nasa_images_provider::NasaImagesProvider;
