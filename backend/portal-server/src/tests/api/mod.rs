mod error;
mod extractors;
mod faq;
mod login_request;
