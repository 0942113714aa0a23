mod page_document;

pub use page_document::PageDocument;
