//! HTTP handlers for the dashboard routes.
//!
//! `GET /dashboard` runs the load phase; `POST /dashboard` runs the
//! submission phase. The POST serves two clients with the same contract: a
//! fetch-style caller gets the JSON payload, a browser document POST (Accept
//! prefers text/html) gets the page re-rendered with the enhanced record
//! selected, or with the inline failure notice when enhancement failed.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::session_token;
use crate::dashboard::controller::{LoadOutcome, PageController, SubmitOutcome};
use crate::dashboard::page::{render_page, PageView};
use crate::errors::AppError;
use crate::models::cv::CvRecord;
use crate::state::AppState;

pub const SIGN_IN_PATH: &str = "/sign-in";

const MSG_ENHANCED: &str = "Enhanced CV data received";
const MSG_NO_DATA: &str = "No CV data received";

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "extractedCV", default)]
    pub extracted_cv: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    #[serde(rename = "enhancedCV", skip_serializing_if = "Option::is_none")]
    pub enhanced_cv: Option<CvRecord>,
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// GET /dashboard
/// Unauthenticated entry redirects to the sign-in page with no body. An
/// authenticated entry renders the extracted form, the empty state, or the
/// inline load error — an enhanced record never appears on a fresh load.
pub async fn handle_show_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let token = session_token(&headers);
    let controller = PageController::new(&state);

    match controller.load(token.as_deref()).await? {
        LoadOutcome::RedirectToSignIn => Ok(Redirect::to(SIGN_IN_PATH).into_response()),
        LoadOutcome::Page(data) => {
            info!(user_id = %data.user_id, has_cv = data.cv_record.is_some(), "Dashboard loaded");
            let html = render_page(&PageView {
                extracted: data.cv_record.as_ref(),
                load_error: data.load_error.as_deref(),
                ..Default::default()
            });
            Ok(Html(html).into_response())
        }
    }
}

/// POST /dashboard
/// Accepts one form field, `extractedCV`, holding the serialized record.
pub async fn handle_submit_cv(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    let mut controller = PageController::new(&state);
    let outcome = controller.submit(form.extracted_cv.as_deref()).await;

    if wants_html(&headers) {
        return submit_as_html(&controller, form.extracted_cv.as_deref(), outcome);
    }

    match outcome? {
        SubmitOutcome::NoData => Ok(Json(SubmitResponse {
            message: MSG_NO_DATA.to_string(),
            enhanced_cv: None,
        })
        .into_response()),
        SubmitOutcome::Enhanced(enhanced) => Ok(Json(SubmitResponse {
            message: MSG_ENHANCED.to_string(),
            enhanced_cv: Some(enhanced),
        })
        .into_response()),
    }
}

/// Browser document-POST branch: re-render the page instead of returning the
/// JSON payload. An enhancement failure clears the pending UI through the
/// `Failed` state and renders the inline notice next to the form with the
/// submitted record still in it.
fn submit_as_html(
    controller: &PageController,
    raw: Option<&str>,
    outcome: Result<SubmitOutcome, AppError>,
) -> Result<Response, AppError> {
    match outcome {
        Ok(SubmitOutcome::Enhanced(enhanced)) => {
            let html = render_page(&PageView {
                enhanced: Some(&enhanced),
                ..Default::default()
            });
            Ok(Html(html).into_response())
        }
        Ok(SubmitOutcome::NoData) => {
            let html = render_page(&PageView {
                notice: Some(MSG_NO_DATA),
                ..Default::default()
            });
            Ok(Html(html).into_response())
        }
        // Malformed submissions stay a 400 even for browser posts.
        Err(err @ AppError::Validation(_)) => Err(err),
        Err(_) => {
            let submitted = raw
                .and_then(|raw| CvRecord::from_form_json(raw).ok())
                .flatten();
            let html = render_page(&PageView {
                extracted: submitted.as_ref(),
                submit_failure: controller.submission().failure_message(),
                ..Default::default()
            });
            Ok(Html(html).into_response())
        }
    }
}
