//! End-to-end behaviour of the portfolio core across launches.

mod common;

use std::sync::Arc;

use common::{github_repos_fixture, test_repos_url, MockHttpConfig, TestPortfolioBuilder};
use folio::adapters::FileStore;
use folio::engagement::{INITIAL_LIKE_COUNT, VISITOR_SEED_RANGE};
use folio::feed::FeedState;
use folio::preferences::keys;
use folio::router::Section;
use folio::theme::Theme;
use folio::traits::KeyValueStore;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> Arc<FileStore> {
    Arc::new(FileStore::new(dir.path().join("preferences.json")))
}

#[test]
fn test_fresh_visitor() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    let mut portfolio = TestPortfolioBuilder::new()
        .with_persistent(store.clone())
        .with_platform_dark(true)
        .build();

    let (theme, engagement) = portfolio.initialize();

    assert_eq!(engagement.like_count, INITIAL_LIKE_COUNT);
    assert!(!engagement.has_liked);
    assert!(VISITOR_SEED_RANGE.contains(&engagement.visitor_count));
    assert_eq!(theme, Theme::DARK);

    assert_eq!(store.get_raw("darkMode").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get_raw("likeCount").unwrap().as_deref(), Some("127"));
    assert_eq!(store.get_raw("hasLiked").unwrap().as_deref(), Some("false"));
    let persisted: u64 = store.get_raw("visitorCount").unwrap().unwrap().parse().unwrap();
    assert_eq!(persisted, engagement.visitor_count + 1);
}

#[test]
fn test_returning_visitor_who_already_liked() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    store.set_raw("hasLiked", "true").unwrap();
    store.set_raw("likeCount", "128").unwrap();

    let mut portfolio = TestPortfolioBuilder::new().with_persistent(store.clone()).build();
    portfolio.initialize();

    assert!(!portfolio.engagement.like());
    assert_eq!(portfolio.engagement.like_count(), 128);
    assert_eq!(store.get_raw("likeCount").unwrap().as_deref(), Some("128"));
}

#[test]
fn test_like_and_theme_survive_restart() {
    let dir = TempDir::new().unwrap();

    let first_visitors = {
        let mut portfolio = TestPortfolioBuilder::new()
            .with_persistent(file_store(&dir))
            .with_platform_dark(false)
            .build();
        let (_, engagement) = portfolio.initialize();
        assert!(portfolio.engagement.like());
        portfolio.theme.toggle();
        engagement.visitor_count
    };

    // The platform preference no longer matters once a choice is saved
    let mut portfolio = TestPortfolioBuilder::new()
        .with_persistent(file_store(&dir))
        .with_platform_dark(false)
        .build();
    let (theme, engagement) = portfolio.initialize();

    assert!(theme.is_dark());
    assert!(engagement.has_liked);
    assert_eq!(engagement.like_count, 128);
    assert_eq!(engagement.visitor_count, first_visitors + 1);
    assert_eq!(portfolio.prefs.lookup::<u64>(&keys::VISITOR_COUNT), Some(first_visitors + 2));
}

#[test]
fn test_corrupt_preferences_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "not json at all").unwrap();

    let mut portfolio = TestPortfolioBuilder::new()
        .with_persistent(file_store(&dir))
        .build();
    let (theme, engagement) = portfolio.initialize();

    assert!(!theme.is_dark());
    assert_eq!(engagement.like_count, INITIAL_LIKE_COUNT);

    // The first write replaces the unreadable file
    let mut again = TestPortfolioBuilder::new()
        .with_persistent(file_store(&dir))
        .build();
    assert_eq!(again.initialize().1.visitor_count, engagement.visitor_count + 1);
}

#[tokio::test]
async fn test_projects_section_loads_feed() {
    let http = MockHttpConfig::new()
        .with_json_response(&test_repos_url(), 200, &github_repos_fixture())
        .build();
    let mut portfolio = TestPortfolioBuilder::new()
        .with_http(Arc::new(http.clone()))
        .build();
    portfolio.initialize();

    let fetch = portfolio.select_section("projects").expect("projects starts a fetch");
    assert!(portfolio.feed.complete(fetch.run().await));

    assert!(matches!(portfolio.feed.state(), FeedState::Ready));
    assert_eq!(portfolio.feed.items().len(), 8);
    assert_eq!(portfolio.feed.page().len(), 6);
    assert_eq!(portfolio.feed.total_pages(), 2);

    // Leaving and coming back is served from the session cache
    portfolio.select_section("contact");
    assert!(portfolio.select_section("projects").is_none());
    assert_eq!(http.request_count(), 1);
}

#[test]
fn test_disabled_certificates_request_is_ignored() {
    let mut portfolio = TestPortfolioBuilder::new().build();
    portfolio.select_section("skills");

    assert!(portfolio.select_section("certificates").is_none());
    assert_eq!(portfolio.router.active_section(), Section::Skills);
}

#[test]
fn test_certificates_reachable_when_enabled() {
    let config = folio::config::FolioConfig::default().with_certificates_enabled(true);
    let mut portfolio = TestPortfolioBuilder::new().with_config(config).build();

    portfolio.select_section("certificates");
    assert_eq!(portfolio.router.active_section(), Section::Certificates);
}
