use std::time::Duration;

use placeholder_core::{
    Action, Fetcher, FetchParams, FetchStatus, ResourceKind, Session, Toasts, ViewState,
};
use reqwest::Client;
use serde_json::json;
use tokio::runtime::Handle;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer) -> Session<Toasts> {
    Session::new(
        ViewState::new(FetchParams::default()),
        Fetcher::new(Client::new(), Url::parse(&server.uri()).unwrap()),
        Toasts::new(Duration::from_secs(5)),
        Handle::current(),
    )
}

async fn settle(session: &mut Session<Toasts>) -> Action {
    tokio::time::timeout(Duration::from_secs(5), session.next_outcome())
        .await
        .expect("timed out")
        .expect("channel closed")
}

#[tokio::test]
async fn displays_post_within_default_bounds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Title 1", "body": "a".repeat(150)},
            {"id": 2, "title": "Title 2", "body": "a".repeat(10)}
        ])))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(Action::SelectView(ResourceKind::Posts));
    settle(&mut session).await;

    let table = session.table().unwrap();
    assert_eq!(table.label, "Posts:");
    assert!(table.contains_text("Title 1"));
    assert!(!table.contains_text("Title 2"));
    assert!(session.sink().is_empty());
}

#[tokio::test]
async fn displays_comments_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "postId": 1, "name": "Name 1", "email": "email@example.com", "body": "Body 1"}
        ])))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(Action::SelectView(ResourceKind::Comments));
    settle(&mut session).await;

    let table = session.table().unwrap();
    assert_eq!(table.label, "Comments:");
    assert_eq!(table.rows.len(), 1);
    assert!(table.contains_text("Name 1"));
}

#[tokio::test]
async fn failed_status_raises_notification_and_shows_no_new_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    for kind in ResourceKind::ALL {
        session.dispatch(Action::SelectView(kind));
        settle(&mut session).await;

        let table = session.table().unwrap();
        assert!(table.rows.is_empty());
        let expected = format!("Failed to fetch {}", kind.path());
        assert_eq!(table.status, FetchStatus::Failed(expected.clone()));
        let last = session.sink().iter().last().unwrap();
        assert_eq!(last.message, expected);
        assert_eq!(last.title, "Error");
    }
    assert_eq!(session.sink().len(), 4);
}

#[tokio::test]
async fn limit_change_refetches_with_new_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/albums"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "userId": 1, "title": "first"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/albums"))
        .and(query_param("_limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "userId": 1, "title": "first"},
            {"id": 2, "userId": 1, "title": "second"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(Action::SelectView(ResourceKind::Albums));
    settle(&mut session).await;
    assert_eq!(session.table().unwrap().rows.len(), 1);

    session.dispatch(Action::SetLimit(2));
    settle(&mut session).await;
    assert_eq!(session.table().unwrap().rows.len(), 2);
}

#[tokio::test]
async fn drain_applies_outcomes_without_waiting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "albumId": 1, "title": "t", "thumbnailUrl": "https://img/3"}
        ])))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.dispatch(Action::SelectView(ResourceKind::Photos));
    assert_eq!(session.state().status(ResourceKind::Photos), &FetchStatus::Loading);

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while session.drain() == 0 {
        assert!(tokio::time::Instant::now() < deadline, "timed out");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(session.state().status(ResourceKind::Photos), &FetchStatus::Loaded);
    assert!(session.table().unwrap().contains_text("Photo 3"));
}
