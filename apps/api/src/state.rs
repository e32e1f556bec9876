use std::sync::Arc;

use crate::auth::IdentityResolver;
use crate::config::Config;
use crate::enhance::Enhancer;
use crate::store::{CvStore, UserLookup};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every gateway is carried as a trait object so tests can stand in fakes
/// without a database, identity provider, or LLM endpoint behind them.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityResolver>,
    pub users: Arc<dyn UserLookup>,
    pub cv_store: Arc<dyn CvStore>,
    pub enhancer: Arc<dyn Enhancer>,
    pub config: Config,
}
