//! End-to-end tests of the author page against the fixture-backed Galaxy.

use std::sync::Arc;

use author_page::connector::api::{Container, ContainerConfig, Router};
use author_page::{
    AppliedFilter, AuthorPageServices, AuthorPageUseCase, Commands, FetchOutcome, FollowState,
    InMemoryGalaxy, OpenOutcome, OutputFormat, PackageKind, PreferencesService,
    RecordingNavigator, ResolveAuthorRouteUseCase,
};

const FIXTURE: &str = include_str!("fixtures/galaxy.json");

struct TestEnv {
    galaxy: Arc<InMemoryGalaxy>,
    navigator: Arc<RecordingNavigator>,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            galaxy: Arc::new(InMemoryGalaxy::from_json(FIXTURE).expect("fixture parses")),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    fn services(&self) -> AuthorPageServices {
        AuthorPageServices::new(
            self.galaxy.clone(),
            self.galaxy.clone(),
            self.galaxy.clone(),
            self.navigator.clone(),
        )
    }

    async fn open(&self, namespace: &str) -> OpenOutcome {
        let route = ResolveAuthorRouteUseCase::new(self.galaxy.clone(), self.galaxy.clone())
            .execute(namespace)
            .await
            .expect("route resolves");
        AuthorPageUseCase::open(self.services(), route).expect("page opens")
    }

    async fn page(&self, namespace: &str) -> Arc<AuthorPageUseCase> {
        match self.open(namespace).await {
            OpenOutcome::Ready(page) => page,
            OpenOutcome::NotFound => panic!("{} should exist", namespace),
        }
    }
}

fn names(page: &AuthorPageUseCase) -> Vec<String> {
    let view = page.view();
    view.listing
        .collections
        .iter()
        .map(|c| c.name.clone())
        .chain(view.listing.repositories.iter().map(|r| r.name.clone()))
        .collect()
}

#[tokio::test]
async fn test_unknown_author_redirects_to_not_found() {
    let env = TestEnv::new();

    let outcome = env.open("nobody").await;

    assert!(matches!(outcome, OpenOutcome::NotFound));
    assert_eq!(env.navigator.history(), vec!["/not-found"]);
}

#[tokio::test]
async fn test_initial_view_is_prepared() {
    let env = TestEnv::new();
    let view = env.page("acme").await.view();

    assert_eq!(view.pagination.total_items, 4);
    assert_eq!(view.results_count, 4);
    assert_eq!(view.header.breadcrumb(), "Community Authors;/community;acme");
    assert_eq!(view.namespace.avatar_url.as_deref(), Some("/assets/avatar.png"));

    let counts: Vec<_> = view
        .namespace
        .content_counts
        .iter()
        .map(|c| (c.title.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("Roles", 3), ("Plugins", 3)]);

    let web_server = view
        .listing
        .repositories
        .iter()
        .find(|r| r.name == "web_server")
        .expect("web_server listed");
    assert_eq!(web_server.format.as_deref(), Some("role"));
    assert_eq!(web_server.description.as_deref(), Some("Configures a web server"));
    assert_eq!(web_server.display.as_ref().unwrap().last_import, "NA");

    let nginx = view
        .listing
        .repositories
        .iter()
        .find(|r| r.name == "nginx")
        .expect("nginx listed");
    let display = nginx.display.as_ref().unwrap();
    assert!(display.last_import.ends_with("ago"));
    assert_eq!(display.last_import_state, "SUCCESS");
}

#[tokio::test]
async fn test_vendor_header() {
    let env = TestEnv::new();
    let view = env.page("redhat").await.view();

    assert_eq!(view.header.breadcrumb(), "Partners;/partners;redhat");
    assert_eq!(view.header.icon_class, "fa fa-star");
}

#[tokio::test]
async fn test_name_filter_narrows_listing() {
    let env = TestEnv::new();
    let page = env.page("acme").await;

    let outcome = page
        .filter_changed(&[AppliedFilter::text("name", " web ")])
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(names(&page), vec!["web_utils", "web_server"]);
    assert_eq!(page.view().results_count, 2);
}

#[tokio::test]
async fn test_type_filter_and_descending_downloads() {
    let env = TestEnv::new();
    let page = env.page("acme").await;

    page.filter_changed(&[AppliedFilter::select("type", "collection")])
        .await
        .unwrap();
    page.sort_changed("download_count", false).await.unwrap();

    assert_eq!(names(&page), vec!["network_tools", "web_utils"]);
    let view = page.view();
    assert_eq!(view.listing.repository_count, 0);
    assert_eq!(view.query.sort_key(), "-download_count");
}

#[tokio::test]
async fn test_paging_through_merged_listing() {
    let env = TestEnv::new();
    let page = env.page("acme").await;

    page.page_size_changed(1).await.unwrap();
    page.page_number_changed(2).await.unwrap();

    assert_eq!(names(&page), vec!["nginx"]);
    let view = page.view();
    assert_eq!(view.pagination.page_number, 2);
    assert_eq!(view.pagination.total_items, 4);

    // a new filter starts over from the first page
    page.filter_changed(&[]).await.unwrap();
    assert_eq!(page.view().pagination.page_number, 1);
    assert_eq!(names(&page), vec!["network_tools"]);
}

#[tokio::test]
async fn test_follow_and_unfollow_persist() {
    let env = TestEnv::new();
    let page = env.page("acme").await;

    let status = page.spawn_follow_sync().await.unwrap().unwrap();
    assert!(status.available);
    assert_eq!(status.state, FollowState::NotFollowing);

    assert_eq!(page.toggle_follow().await.unwrap(), FollowState::Following);
    let stored = env.galaxy.get().await.unwrap();
    assert_eq!(stored.namespaces_followed, vec![7, 42]);
    assert!(stored.extra.contains_key("repositories_followed"));

    assert_eq!(page.toggle_follow().await.unwrap(), FollowState::NotFollowing);
    assert_eq!(env.galaxy.get().await.unwrap().namespaces_followed, vec![7]);
}

#[tokio::test]
async fn test_router_renders_json_from_fixture_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("galaxy.json");
    std::fs::write(&path, FIXTURE).expect("write fixture");

    let container = Container::new(ContainerConfig {
        base_url: None,
        token: None,
        fixture: Some(path),
    })
    .expect("container");
    let router = Router::new(&container);

    let output = router
        .route(Commands::Show {
            namespace: "acme".to_string(),
            name: None,
            kind: Some(PackageKind::Repository),
            sort: Some("download_count".to_string()),
            desc: true,
            page: None,
            page_size: None,
            format: OutputFormat::Json,
        })
        .await
        .expect("show");

    let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(json["results_count"], 2);
    assert_eq!(json["listing"]["repositories"][0]["name"], "nginx");
    assert_eq!(json["follow"]["state"], "not_following");

    let path = router
        .route(Commands::Open {
            namespace: "acme".to_string(),
            item: "web_utils".to_string(),
        })
        .await
        .expect("open");
    assert_eq!(path, "/acme/web_utils");

    let message = router
        .route(Commands::Follow {
            namespace: "acme".to_string(),
        })
        .await
        .expect("follow");
    assert_eq!(message, "You are now following acme.");
}

#[tokio::test]
async fn test_router_reports_unknown_author() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("galaxy.json");
    std::fs::write(&path, FIXTURE).expect("write fixture");

    let container = Container::new(ContainerConfig {
        base_url: None,
        token: None,
        fixture: Some(path),
    })
    .expect("container");

    let output = Router::new(&container)
        .route(Commands::Follow {
            namespace: "ghost".to_string(),
        })
        .await
        .expect("follow");

    assert_eq!(output, "Author 'ghost' not found (redirected to /not-found).");
}

fn crowded_fixture() -> serde_json::Value {
    let acme = serde_json::json!({ "id": 42, "name": "acme" });
    let collections: Vec<_> = (0..10)
        .map(|i| {
            serde_json::json!({
                "id": 100 + i,
                "name": format!("aweb{}", i),
                "download_count": 1,
                "summary_fields": { "namespace": acme },
            })
        })
        .collect();
    serde_json::json!({
        "namespaces": [{ "id": 42, "name": "acme" }],
        "repositories": [{
            "id": 1,
            "name": "web",
            "download_count": 1,
            "summary_fields": { "namespace": acme },
        }],
        "collections": collections,
    })
}

#[tokio::test]
async fn test_router_opens_item_beyond_first_page() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("crowded.json");
    std::fs::write(&path, crowded_fixture().to_string()).expect("write fixture");

    let container = Container::new(ContainerConfig {
        base_url: None,
        token: None,
        fixture: Some(path),
    })
    .expect("container");
    let router = Router::new(&container);

    let path = router
        .route(Commands::Open {
            namespace: "acme".to_string(),
            item: "web".to_string(),
        })
        .await
        .expect("open");
    assert_eq!(path, "/acme/web");
    assert_eq!(container.navigator().last().as_deref(), Some("/acme/web"));

    let missing = router
        .route(Commands::Open {
            namespace: "acme".to_string(),
            item: "aweb".to_string(),
        })
        .await;
    assert!(missing.is_err());
}
