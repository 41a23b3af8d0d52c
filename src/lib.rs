pub mod auth;
pub mod config;
pub mod defaults;
pub mod dto;
pub mod error;
pub mod feed;
pub mod models;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::auth::{AuthContext, Session};
use crate::config::Config;
use crate::error::Result;
use crate::feed::{ActiveVacancies, ContentFeed, FeedMode};
use crate::models::project::Project;
use crate::models::service::Service;
use crate::models::staff::Staff;
use crate::models::vacancy::Vacancy;
use crate::storage::StorageClient;
use crate::store::postgrest::PostgrestClient;
use crate::store::projects::ProjectStore;
use crate::store::services::ServiceStore;
use crate::store::staff::StaffStore;
use crate::store::vacancies::VacancyStore;

/// Everything the site and the dashboard need to reach content: one store
/// per collection, the auth context and the media storage client, all
/// sharing a single HTTP client.
#[derive(Clone)]
pub struct ContentClient {
    rest: PostgrestClient,
    pub projects: Arc<ProjectStore>,
    pub services: Arc<ServiceStore>,
    pub staff: Arc<StaffStore>,
    pub vacancies: Arc<VacancyStore>,
    pub auth: AuthContext,
    pub storage: StorageClient,
}

impl ContentClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        let rest = PostgrestClient::new(http.clone(), config)?;

        Ok(Self {
            projects: Arc::new(ProjectStore::new(rest.clone())),
            services: Arc::new(ServiceStore::new(rest.clone())),
            staff: Arc::new(StaffStore::new(rest.clone())),
            vacancies: Arc::new(VacancyStore::new(rest.clone())),
            auth: AuthContext::new(http.clone(), rest.clone(), config)?,
            storage: StorageClient::new(http, config)?,
            rest,
        })
    }

    /// Rewires the stores and storage with the signed-in user's token. The
    /// anonymous client keeps serving the public site untouched; session
    /// state stays shared through the cloned auth context.
    pub fn with_session(&self, session: &Session) -> Self {
        let rest = self.rest.with_access_token(&session.access_token);
        Self {
            projects: Arc::new(ProjectStore::new(rest.clone())),
            services: Arc::new(ServiceStore::new(rest.clone())),
            staff: Arc::new(StaffStore::new(rest.clone())),
            vacancies: Arc::new(VacancyStore::new(rest.clone())),
            auth: self.auth.clone(),
            storage: self.storage.with_access_token(&session.access_token),
            rest,
        }
    }

    pub fn project_feed(&self, mode: FeedMode) -> ContentFeed<Project> {
        ContentFeed::new(self.projects.clone(), defaults::projects::seed, mode)
    }

    pub fn service_feed(&self, mode: FeedMode) -> ContentFeed<Service> {
        ContentFeed::new(self.services.clone(), defaults::services::seed, mode)
    }

    pub fn staff_feed(&self, mode: FeedMode) -> ContentFeed<Staff> {
        ContentFeed::new(self.staff.clone(), defaults::staff::seed, mode)
    }

    pub fn vacancy_feed(&self, mode: FeedMode) -> ContentFeed<Vacancy> {
        ContentFeed::new(self.vacancies.clone(), defaults::vacancies::seed, mode)
    }

    /// Careers-page listing: open vacancies, falling back to the filtered
    /// seed subset rather than the full seed list.
    pub fn active_vacancy_feed(&self, mode: FeedMode) -> ContentFeed<Vacancy> {
        ContentFeed::new(
            Arc::new(ActiveVacancies(self.vacancies.clone())),
            defaults::vacancies::active_seed,
            mode,
        )
    }
}
