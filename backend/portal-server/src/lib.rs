pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{auth::login, login_request::LoginRequest},
    error::{ApiError, CREDENTIALS_REJECTED_MESSAGE, LOGIN_FAILED_MESSAGE, Result as ApiResult},
    extractors::current_user::CurrentUser,
    portal::{
        demo_documents::{STATUS_NEW, STATUS_REVIEWED, demo_documents},
        document_metadata::DocumentMetadata,
        documents::{list_documents, upload_document},
    },
    public::{
        faq::{FALLBACK_ANSWER, answer_for},
        public::{ROOT_MESSAGE, qa_chatbot, root},
        qa_request::QaRequest,
        qa_response::QaResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
