//! Integration tests for [`dbot_sources::SlangClient`] against a mock HTTP server.

use std::time::Duration;

use dbot_sources::{SlangClient, SlangSource, SourceError};
use mockito::Matcher;

fn client_for(server: &mockito::ServerGuard) -> SlangClient {
    let base = format!("{}/v0/define", server.url());
    SlangClient::new(&base, Duration::from_secs(2)).expect("client")
}

/// **Test: Entries are returned in source order with the query sent as `term`.**
#[tokio::test]
async fn test_fetch_entries_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::UrlEncoded("term".into(), "yeet".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"list": [
                {"word": "yeet", "definition": "To [throw] something.", "example": "He [yeeted] it.",
                 "thumbs_up": 120, "thumbs_down": 7, "author": "alice",
                 "permalink": "https://slang.example/yeet/1"},
                {"word": "Yeet", "definition": "An exclamation.", "example": "",
                 "thumbs_up": 5, "thumbs_down": 1, "author": "bob"}
            ]}"#,
        )
        .create_async()
        .await;

    let entries = client_for(&server)
        .fetch("yeet")
        .await
        .unwrap()
        .expect("entries present");

    mock.assert_async().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].definition, "To [throw] something.");
    assert_eq!(entries[0].thumbs_up, 120);
    assert_eq!(entries[0].permalink.as_deref(), Some("https://slang.example/yeet/1"));
    assert_eq!(entries[1].word, "Yeet");
    assert!(entries[1].example.is_none());
}

/// **Test: An empty list means not found.**
#[tokio::test]
async fn test_empty_list_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"list": []}"#)
        .create_async()
        .await;

    assert!(client_for(&server).fetch("nothing").await.unwrap().is_none());
}

/// **Test: A non-JSON body is malformed; lookup swallows it.**
#[tokio::test]
async fn test_malformed_body_swallowed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/define")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.fetch("yeet").await,
        Err(SourceError::MalformedResponse(_))
    ));
    assert!(client.lookup("yeet").await.is_none());
}
