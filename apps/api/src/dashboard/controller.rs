//! Page Controller — orchestrates the load phase and the submission phase
//! for one rendered page instance.
//!
//! One controller per request/render. The submission state machine lives on
//! the controller instance, so pending-UI state is scoped to that instance
//! and never shared across users or sessions. A submission is only reachable
//! after a load produced a record (the form does not render without one), so
//! the controller never interleaves the two phases.

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::IdentityResolver;
use crate::dashboard::submission::SubmissionState;
use crate::enhance::Enhancer;
use crate::errors::AppError;
use crate::models::cv::CvRecord;
use crate::state::AppState;
use crate::store::{CvStore, UserLookup};

/// What the load phase hands to the view layer.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No authenticated identity, or an identity with no local user record.
    /// The only action is a redirect to the sign-in page.
    RedirectToSignIn,
    Page(PageData),
}

/// Data for an authenticated render. At most one of `cv_record` and
/// `load_error` is set; with neither, the page shows no form and no result.
#[derive(Debug)]
pub struct PageData {
    pub user_id: Uuid,
    pub cv_record: Option<CvRecord>,
    /// CV-store failure recovered into an inline message. The page stays on
    /// the same route and remains usable.
    pub load_error: Option<String>,
}

/// What the submission phase responds with on the non-failure paths.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission carried no record, or an empty one. A benign no-op,
    /// not an error; the enhancement gateway is never invoked.
    NoData,
    /// The enhanced record, exactly as the gateway returned it.
    Enhanced(CvRecord),
}

pub struct PageController {
    identity: Arc<dyn IdentityResolver>,
    users: Arc<dyn UserLookup>,
    cv_store: Arc<dyn CvStore>,
    enhancer: Arc<dyn Enhancer>,
    submission: SubmissionState,
}

impl PageController {
    pub fn new(state: &AppState) -> Self {
        Self {
            identity: state.identity.clone(),
            users: state.users.clone(),
            cv_store: state.cv_store.clone(),
            enhancer: state.enhancer.clone(),
            submission: SubmissionState::default(),
        }
    }

    /// Load phase. Resolves the session token to a local user, then asks the
    /// CV Store Gateway for that user's record.
    ///
    /// Identity-resolver and user-lookup infrastructure failures propagate as
    /// opaque request failures. A CV-store failure does not: it is recovered
    /// into `PageData::load_error` and shown inline.
    pub async fn load(&self, session_token: Option<&str>) -> Result<LoadOutcome, AppError> {
        let subject = self
            .identity
            .resolve(session_token)
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;
        let Some(subject) = subject else {
            return Ok(LoadOutcome::RedirectToSignIn);
        };

        // An identity with no local user record is unauthenticated for this
        // workflow; the CV store is never consulted for it.
        let Some(user) = self.users.find_by_subject(&subject).await? else {
            return Ok(LoadOutcome::RedirectToSignIn);
        };

        match self.cv_store.load_cv(user.id).await {
            Ok(cv_record) => Ok(LoadOutcome::Page(PageData {
                user_id: user.id,
                cv_record,
                load_error: None,
            })),
            Err(e) => Ok(LoadOutcome::Page(PageData {
                user_id: user.id,
                cv_record: None,
                load_error: Some(e.to_string()),
            })),
        }
    }

    /// Submission phase. `raw` is the serialized CV record from the form's
    /// hidden field, or `None` when the field was missing entirely.
    ///
    /// Unparseable input is a malformed submission (400). An absent or empty
    /// record short-circuits to [`SubmitOutcome::NoData`]. Otherwise the
    /// Enhancement Gateway is invoked exactly once; its failure moves the
    /// state machine to `Failed` and re-raises as an opaque request failure.
    pub async fn submit(&mut self, raw: Option<&str>) -> Result<SubmitOutcome, AppError> {
        if !self.submission.begin() {
            // Disabled control refused the action; nothing changes.
            return Ok(SubmitOutcome::NoData);
        }

        let Some(raw) = raw else {
            self.submission.complete();
            return Ok(SubmitOutcome::NoData);
        };

        let record = CvRecord::from_form_json(raw)
            .map_err(|e| AppError::Validation(format!("Malformed CV submission: {e}")))?;

        let record = match record {
            Some(record) if !record.is_empty() => record,
            _ => {
                self.submission.complete();
                return Ok(SubmitOutcome::NoData);
            }
        };

        match self.enhancer.enhance(&record).await {
            Ok(enhanced) => {
                self.submission.complete();
                Ok(SubmitOutcome::Enhanced(enhanced))
            }
            Err(e) => {
                self.submission.fail("Failed to enhance CV");
                Err(e)
            }
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }
}
