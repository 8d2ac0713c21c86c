//! Transport-agnostic view of the QA server.

use std::future::Future;
use std::sync::Arc;

use crate::error_handler::Result;
use crate::models::{AnswerResult, Question, StatusReport};

/// The two calls the front-end makes against the QA server.
///
/// [`crate::QaHttpClient`] is the production implementation; the UI
/// controller is generic over this trait so it can be driven by a scripted
/// backend in tests.
pub trait QaApi: Send + Sync {
    /// `GET /status`.
    fn status(&self) -> impl Future<Output = Result<StatusReport>> + Send;

    /// `POST /ask` with `{"question": ...}`.
    fn ask(&self, question: &Question) -> impl Future<Output = Result<AnswerResult>> + Send;
}

impl<T: QaApi> QaApi for Arc<T> {
    fn status(&self) -> impl Future<Output = Result<StatusReport>> + Send {
        (**self).status()
    }

    fn ask(&self, question: &Question) -> impl Future<Output = Result<AnswerResult>> + Send {
        (**self).ask(question)
    }
}
