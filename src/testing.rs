//! In-memory stand-in for the API gateway used by unit tests.

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use serde_json::Value;

use crate::api::{Endpoint, Fetch};
use crate::error::FetchError;

struct Route {
    path: String,
    param: Option<(String, String)>,
    response: Result<Value, StatusCode>,
}

impl Route {
    fn matches(&self, endpoint: &Endpoint) -> bool {
        self.path == endpoint.path()
            && self
                .param
                .as_ref()
                .is_none_or(|(k, v)| endpoint.get(k) == Some(v.as_str()))
    }
}

#[derive(Default)]
struct State {
    routes: Vec<Route>,
    calls: Vec<Endpoint>,
}

/// Answers endpoints from canned routes and records every call.
/// Unrouted endpoints fail with 404.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(self, path: &str, param: Option<(&str, &str)>, response: Result<Value, StatusCode>) -> Self {
        self.state.lock().unwrap().routes.push(Route {
            path: path.to_string(),
            param: param.map(|(k, v)| (k.to_string(), v.to_string())),
            response,
        });
        self
    }

    pub fn respond(self, path: &str, body: Value) -> Self {
        self.route(path, None, Ok(body))
    }

    /// Respond only when the endpoint carries `key=value`
    pub fn respond_when(self, path: &str, key: &str, value: &str, body: Value) -> Self {
        self.route(path, Some((key, value)), Ok(body))
    }

    pub fn fail(self, path: &str, status: StatusCode) -> Self {
        self.route(path, None, Err(status))
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Endpoint> {
        self.calls()
            .into_iter()
            .filter(|e| e.path() == path)
            .collect()
    }
}

impl Fetch for FakeApi {
    async fn fetch_resource(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let response = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(endpoint.clone());
            state
                .routes
                .iter()
                .find(|r| r.matches(endpoint))
                .map(|r| r.response.clone())
                .unwrap_or(Err(StatusCode::NOT_FOUND))
        };

        tokio::task::yield_now().await;

        response.map_err(|status| FetchError::Status {
            status,
            body: String::new(),
        })
    }
}

/// Search hit for a video
pub fn video_stub(video_id: &str, channel_id: &str) -> Value {
    serde_json::json!({
        "id": {"kind": "youtube#video", "videoId": video_id},
        "snippet": {
            "title": format!("Video {}", video_id),
            "channelId": channel_id,
            "channelTitle": format!("Channel {}", channel_id),
            "publishedAt": "2024-01-01T00:00:00Z",
            "thumbnails": {"high": {"url": format!("https://i.ytimg.com/vi/{}/hq.jpg", video_id)}},
            "liveBroadcastContent": "none"
        }
    })
}

/// Search hit for a channel
pub fn channel_stub(channel_id: &str) -> Value {
    serde_json::json!({
        "id": {"kind": "youtube#channel", "channelId": channel_id},
        "snippet": {
            "title": format!("Channel {}", channel_id),
            "channelId": channel_id,
            "channelTitle": format!("Channel {}", channel_id),
            "thumbnails": {"high": {"url": format!("https://yt3.ggpht.com/{}", channel_id)}}
        }
    })
}

pub fn items(items: Vec<Value>) -> Value {
    serde_json::json!({ "items": items })
}
