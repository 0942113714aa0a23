mod image_library_provider;

pub use image_library_provider::ImageLibraryProvider;
