//! Shared application state wiring stores, services and collaborators.

use std::sync::Arc;

use tracing::info;

use learnhub_core::config::AppConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_service::category::CategoryService;
use learnhub_service::context::CallerContext;
use learnhub_service::identity::IdentityService;
use learnhub_service::lesson::LessonService;
use learnhub_service::message::MessageService;
use learnhub_service::prefs::PreferenceService;
use learnhub_service::submission::SubmissionService;
use learnhub_storage::{MemoryBlobStore, MemoryClientStore};
use learnhub_store::Stores;
use learnhub_store::seed;

/// Everything a screen needs, wired once at startup.
#[derive(Debug)]
pub struct AppState {
    /// Loaded application configuration.
    pub config: AppConfig,
    /// The in-memory stores backing every service.
    pub stores: Stores,
    /// Authentication, sessions and user administration.
    pub identity: IdentityService,
    /// The category forest.
    pub categories: CategoryService,
    /// Lesson management and browsing.
    pub lessons: LessonService,
    /// Homework submission and grading.
    pub submissions: SubmissionService,
    /// Direct messaging.
    pub messages: MessageService,
    /// Language preference resolution.
    pub prefs: PreferenceService,
}

impl AppState {
    /// Builds the full service graph from configuration.
    ///
    /// Seeds the stores when seeding is enabled, then attempts to restore
    /// a previously persisted session from the client store.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let stores = Stores::new();
        let client = Arc::new(MemoryClientStore::new());
        let blobs = Arc::new(MemoryBlobStore::new());

        let primary_admin_id = if config.seed.enabled {
            let summary = seed::seed(&stores, &config.seed);
            info!(admin_id = %summary.admin_id, "Seed data loaded");
            Some(summary.admin_id)
        } else {
            None
        };

        let identity = IdentityService::new(
            Arc::clone(&stores.users),
            client.clone(),
            config.session.session_key.clone(),
            primary_admin_id,
        );
        let categories = CategoryService::new(
            Arc::clone(&stores.categories),
            Arc::clone(&stores.lessons),
        );
        let lessons = LessonService::new(
            Arc::clone(&stores.lessons),
            Arc::clone(&stores.categories),
            Arc::clone(&stores.submissions),
        );
        let submissions = SubmissionService::new(
            Arc::clone(&stores.submissions),
            Arc::clone(&stores.lessons),
            blobs,
        );
        let messages = MessageService::new(Arc::clone(&stores.messages));
        let prefs = PreferenceService::new(
            client,
            config.app.clone(),
            config.session.language_key.clone(),
        );

        identity.restore_session()?;

        Ok(Self {
            config,
            stores,
            identity,
            categories,
            lessons,
            submissions,
            messages,
            prefs,
        })
    }

    /// The caller context of the active session, or an authentication
    /// error when nobody is logged in.
    pub fn caller(&self) -> AppResult<CallerContext> {
        self.identity
            .session()
            .current()
            .map(|user| CallerContext::from(&user))
            .ok_or_else(|| AppError::authentication("Not logged in"))
    }
}
