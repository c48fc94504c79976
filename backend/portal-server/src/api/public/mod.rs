pub mod faq;
pub mod public;
pub mod qa_request;
pub mod qa_response;
