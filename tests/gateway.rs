use mockito::{Matcher, Server};
use reqwest::StatusCode;

use streamwave::api::{ApiClient, Endpoint, Fetch};
use streamwave::config::ApiConfig;
use streamwave::detail::{fetch_feed, fetch_video_detail};
use streamwave::enrich::enrich_search_results;
use streamwave::error::{ErrorKind, FetchError};

fn client(server: &Server) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.url(), "test-key", "test-host")).unwrap()
}

const SEARCH_BODY: &str = r#"{
    "items": [
        {"id": {"kind": "youtube#video", "videoId": "v1"},
         "snippet": {"title": "One", "channelId": "c1", "channelTitle": "C1",
                     "publishedAt": "2024-01-01T00:00:00Z",
                     "thumbnails": {"high": {"url": "https://i.ytimg.com/v1.jpg"}}}},
        {"id": {"kind": "youtube#video", "videoId": "v2"},
         "snippet": {"title": "Two", "channelId": "c1", "channelTitle": "C1",
                     "thumbnails": {"high": {"url": "https://i.ytimg.com/v2.jpg"}}}},
        {"id": {"kind": "youtube#channel", "channelId": "c2"},
         "snippet": {"title": "C2", "channelId": "c2"}}
    ]
}"#;

#[tokio::test]
async fn sends_auth_headers_and_result_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/videos")
        .match_header("x-rapidapi-key", "test-key")
        .match_header("x-rapidapi-host", "test-host")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet,statistics".into()),
            Matcher::UrlEncoded("id".into(), "v1".into()),
            Matcher::UrlEncoded("maxResults".into(), "50".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [{"id": "v1", "statistics": {"viewCount": "42"}}]}"#)
        .create_async()
        .await;

    let detail = fetch_video_detail(&client(&server), "v1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.id, "v1");
    assert_eq!(detail.statistics.and_then(|s| s.views()), Some(42));
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("quotaExceeded")
        .create_async()
        .await;

    let err = client(&server)
        .fetch_resource(&Endpoint::new("search").param("q", "New"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Status);
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body, "quotaExceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_shape_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = fetch_feed(&client(&server), "New").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[tokio::test]
async fn missing_items_is_a_shape_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "You are not subscribed to this API."}"#)
        .create_async()
        .await;

    let err = fetch_feed(&client(&server), "New").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[tokio::test]
async fn null_fields_do_not_drop_the_listing() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"items": [
                {"id": {"kind": "youtube#video", "videoId": "v1"},
                 "snippet": {"title": "First", "description": null, "channelId": "c1", "thumbnails": null}},
                {"id": {"kind": "youtube#video", "videoId": "v2"},
                 "snippet": {"title": null, "channelTitle": null}}
            ]}"#,
        )
        .create_async()
        .await;

    let stubs = fetch_feed(&client(&server), "New").await.unwrap();
    assert_eq!(stubs.len(), 2);
    assert_eq!(stubs[0].snippet.description, "");
    assert_eq!(stubs[1].video_id(), Some("v2"));
    assert_eq!(stubs[1].snippet.title, "");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let api = ApiClient::new(ApiConfig::new("http://127.0.0.1:9", "k", "h")).unwrap();
    let err = api
        .fetch_resource(&Endpoint::new("videos"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn search_then_enrich_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "rust".into()))
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create_async()
        .await;
    let videos = server
        .mock("GET", "/videos")
        .match_query(Matcher::UrlEncoded("id".into(), "v1,v2".into()))
        .with_status(200)
        .with_body(
            r#"{"items": [{"id": "v2", "statistics": {"viewCount": "2500"},
                           "contentDetails": {"duration": "PT1H2M3S"}}]}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let channels = server
        .mock("GET", "/channels")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet".into()),
            Matcher::UrlEncoded("id".into(), "c1,c2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"items": [{"id": "c1", "snippet": {"title": "C1",
                           "thumbnails": {"default": {"url": "https://yt3.ggpht.com/c1"}}}}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let api = client(&server);
    let stubs = fetch_feed(&api, "rust").await.unwrap();
    let enriched = enrich_search_results(&api, &stubs).await;

    assert_eq!(enriched.len(), 3);
    assert!(enriched[0].statistics.is_none());
    assert_eq!(
        enriched[1].statistics.as_ref().and_then(|s| s.views()),
        Some(2500)
    );
    assert_eq!(
        enriched[0].channel_thumbnail.as_deref(),
        Some("https://yt3.ggpht.com/c1")
    );
    assert!(enriched[2].channel_thumbnail.is_none());

    videos.assert_async().await;
    channels.assert_async().await;
}

#[tokio::test]
async fn failed_enrichment_keeps_stubs() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/channels")
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let api = client(&server);
    let stubs = fetch_feed(&api, "rust").await.unwrap();
    let enriched = enrich_search_results(&api, &stubs).await;

    assert_eq!(enriched.len(), stubs.len());
    for (video, stub) in enriched.iter().zip(&stubs) {
        assert_eq!(&video.stub, stub);
        assert!(video.statistics.is_none());
        assert!(video.content_details.is_none());
        assert!(video.channel_thumbnail.is_none());
    }
}
