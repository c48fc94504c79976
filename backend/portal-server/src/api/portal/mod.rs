pub mod demo_documents;
pub mod document_metadata;
pub mod documents;
