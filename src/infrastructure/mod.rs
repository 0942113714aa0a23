mod page_writer;

pub use page_writer::write_page;
