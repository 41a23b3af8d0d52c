//! Behavior of the whole client when the backend is unreachable: the
//! sentinel CRUD surface swallows the failure, the feeds apply their
//! per-mode fallback, and the fallible layer still reports what happened.

use url::Url;

use brickline_content::config::Config;
use brickline_content::defaults;
use brickline_content::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use brickline_content::feed::{FeedMode, FeedState};
use brickline_content::models::vacancy::EmploymentType;
use brickline_content::ContentClient;

fn offline_client() -> ContentClient {
    // Port 9 (discard) is expected to refuse the connection outright.
    let config = Config {
        backend_url: Url::parse("http://127.0.0.1:9").unwrap(),
        anon_key: "test-anon-key".to_string(),
        storage_bucket: "site-media".to_string(),
        http_timeout_secs: 5,
    };
    ContentClient::new(&config).expect("client")
}

fn valid_vacancy() -> CreateVacancyPayload {
    CreateVacancyPayload {
        title: "Site Engineer".to_string(),
        location: "Leeds".to_string(),
        employment_type: EmploymentType::FullTime,
        department: "Engineering".to_string(),
        description: "Setting out on a residential scheme.".to_string(),
        requirements: vec!["CSCS card".to_string()],
        responsibilities: Vec::new(),
        is_active: true,
        posted_date: chrono::NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        application_deadline: None,
    }
}

#[tokio::test]
async fn sentinel_surface_swallows_transport_failures() {
    let client = offline_client();

    assert!(client.projects.get_all().await.is_empty());
    assert!(client.staff.get_by_id("default-0").await.is_none());
    assert!(client.vacancies.create(&valid_vacancy()).await.is_none());

    let patch = UpdateVacancyPayload {
        is_active: Some(false),
        ..Default::default()
    };
    assert!(!client.vacancies.update("some-id", &patch).await);
    assert!(!client.services.delete("some-id").await);
}

#[tokio::test]
async fn fallible_layer_still_reports_the_failure() {
    let client = offline_client();
    let err = client.services.fetch_all().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_any_request() {
    let client = offline_client();
    let mut payload = valid_vacancy();
    payload.title.clear();

    let err = client.vacancies.try_create(&payload).await.unwrap_err();
    assert!(!err.is_transport());
}

#[tokio::test]
async fn public_feeds_fall_back_to_seed_content() {
    let client = offline_client();

    let mut feed = client.project_feed(FeedMode::Public);
    assert_eq!(feed.state(), FeedState::Seeded);
    feed.refresh().await;

    assert_eq!(feed.state(), FeedState::ErrorWithFallback);
    assert_eq!(feed.data().len(), defaults::projects::seed().len());
    assert!(feed.error().is_some());
}

#[tokio::test]
async fn dashboard_feeds_stay_honest_on_failure() {
    let client = offline_client();

    let mut feed = client.vacancy_feed(FeedMode::Dashboard);
    assert!(feed.loading());
    feed.refresh().await;

    assert_eq!(feed.state(), FeedState::ErrorEmpty);
    assert!(feed.data().is_empty());
    assert!(feed.error().is_some());
    assert!(!feed.loading());
}

#[tokio::test]
async fn careers_feed_falls_back_to_open_seed_vacancies_only() {
    let client = offline_client();

    let mut feed = client.active_vacancy_feed(FeedMode::Public);
    feed.refresh().await;

    assert_eq!(feed.state(), FeedState::ErrorWithFallback);
    assert_eq!(feed.data().len(), 3);
    assert!(feed.data().iter().all(|v| v.is_active));
}

#[tokio::test]
async fn uploads_report_the_transport_failure() {
    let client = offline_client();
    let err = client
        .storage
        .upload(
            brickline_content::storage::MediaFolder::Projects,
            "site-photo.jpg",
            bytes::Bytes::from_static(b"not really a jpeg"),
        )
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
