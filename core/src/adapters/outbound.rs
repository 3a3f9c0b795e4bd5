pub mod fixture_catalog;
pub mod generated_catalog;
pub mod memory_document;
