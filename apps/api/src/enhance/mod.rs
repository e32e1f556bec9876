//! Enhancement Gateway — pluggable, trait-based transformation of a CV record
//! into an improved record of the same shape.
//!
//! Default backend: `LlmEnhancer` (Claude via `llm_client`). The transformation
//! itself is opaque to the rest of the crate; callers only rely on the
//! contract: same field set in, same field set out, content may change.
//!
//! `AppState` holds an `Arc<dyn Enhancer>`, so tests swap in fakes without
//! touching the controller or handlers. The gateway is NOT idempotent and is
//! invoked at most once per user submit.

use async_trait::async_trait;

use crate::enhance::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::cv::CvRecord;

pub mod prompts;

/// The enhancement trait. Implement this to swap backends without touching
/// the endpoint, handler, or controller code.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, cv: &CvRecord) -> Result<CvRecord, AppError>;
}

/// Enhancement via Claude. A single Messages call per invocation; the reply
/// is deserialized back through `CvRecord`, which is what enforces the
/// shape-preservation contract on whatever the model returns.
pub struct LlmEnhancer(pub LlmClient);

#[async_trait]
impl Enhancer for LlmEnhancer {
    async fn enhance(&self, cv: &CvRecord) -> Result<CvRecord, AppError> {
        let prompt = ENHANCE_PROMPT_TEMPLATE.replace("{cv_json}", &cv.to_form_json());
        self.0
            .call_json::<CvRecord>(&prompt, ENHANCE_SYSTEM)
            .await
            .map_err(|e| AppError::Enhancement(format!("CV enhancement failed: {e}")))
    }
}
