use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use brickline_content::defaults;
use brickline_content::error::{Error, Result};
use brickline_content::feed::{ContentFeed, ContentSource, FeedMode, FeedState};
use brickline_content::models::vacancy::Vacancy;

mock! {
    pub VacancySource {}

    #[async_trait]
    impl ContentSource<Vacancy> for VacancySource {
        async fn fetch(&self) -> Result<Vec<Vacancy>>;
    }
}

fn transport_down() -> Error {
    Error::Store {
        status: 502,
        message: "bad gateway".to_string(),
    }
}

#[tokio::test]
async fn public_mode_shows_the_full_seed_list_when_remote_is_empty() {
    let mut source = MockVacancySource::new();
    source.expect_fetch().times(1).returning(|| Ok(Vec::new()));

    let feed = ContentFeed::mount(
        Arc::new(source),
        defaults::vacancies::seed,
        FeedMode::Public,
    )
    .await;

    assert_eq!(feed.state(), FeedState::Seeded);
    assert_eq!(feed.data().len(), defaults::vacancies::seed().len());
    assert!(feed.error().is_none());
    assert!(!feed.loading());
}

#[tokio::test]
async fn dashboard_mode_shows_an_honest_empty_list() {
    let mut source = MockVacancySource::new();
    source.expect_fetch().times(1).returning(|| Ok(Vec::new()));

    let feed = ContentFeed::mount(
        Arc::new(source),
        defaults::vacancies::seed,
        FeedMode::Dashboard,
    )
    .await;

    assert_eq!(feed.state(), FeedState::Empty);
    assert!(feed.data().is_empty());
    assert!(feed.error().is_none());
    assert!(!feed.loading());
}

#[tokio::test]
async fn failed_fetch_falls_back_to_seeds_in_public_mode_only() {
    let mut public_source = MockVacancySource::new();
    public_source
        .expect_fetch()
        .times(1)
        .returning(|| Err(transport_down()));
    let public = ContentFeed::mount(
        Arc::new(public_source),
        defaults::vacancies::seed,
        FeedMode::Public,
    )
    .await;

    let mut dashboard_source = MockVacancySource::new();
    dashboard_source
        .expect_fetch()
        .times(1)
        .returning(|| Err(transport_down()));
    let dashboard = ContentFeed::mount(
        Arc::new(dashboard_source),
        defaults::vacancies::seed,
        FeedMode::Dashboard,
    )
    .await;

    assert_eq!(public.state(), FeedState::ErrorWithFallback);
    assert_eq!(public.data().len(), defaults::vacancies::seed().len());
    assert!(public.error().is_some());

    assert_eq!(dashboard.state(), FeedState::ErrorEmpty);
    assert!(dashboard.data().is_empty());
    assert!(dashboard.error().is_some());
}

#[tokio::test]
async fn remote_rows_are_shown_verbatim_without_seed_merging() {
    let remote = vec![Vacancy {
        id: "9d41".to_string(),
        ..defaults::vacancies::seed().remove(0)
    }];
    let expected = remote.clone();

    let mut source = MockVacancySource::new();
    source
        .expect_fetch()
        .times(1)
        .returning(move || Ok(remote.clone()));

    let feed = ContentFeed::mount(
        Arc::new(source),
        defaults::vacancies::seed,
        FeedMode::Public,
    )
    .await;

    assert_eq!(feed.state(), FeedState::Ready);
    assert_eq!(feed.data(), expected.as_slice());
}

#[tokio::test]
async fn active_listing_falls_back_to_the_filtered_seed_subset() {
    let mut source = MockVacancySource::new();
    source
        .expect_fetch()
        .times(1)
        .returning(|| Err(transport_down()));

    let feed = ContentFeed::mount(
        Arc::new(source),
        defaults::vacancies::active_seed,
        FeedMode::Public,
    )
    .await;

    assert_eq!(feed.state(), FeedState::ErrorWithFallback);
    assert_eq!(feed.data().len(), 3);
    assert!(feed.data().iter().all(|v| v.is_active));
    assert!(feed.data().iter().all(|v| v.title != "Quantity Surveyor"));
}

#[tokio::test]
async fn explicit_refetch_issues_exactly_one_more_fetch() {
    let mut source = MockVacancySource::new();
    source.expect_fetch().times(2).returning(|| Ok(Vec::new()));

    let mut feed = ContentFeed::mount(
        Arc::new(source),
        defaults::vacancies::seed,
        FeedMode::Dashboard,
    )
    .await;
    feed.refresh().await;

    assert_eq!(feed.state(), FeedState::Empty);
}
