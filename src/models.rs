use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Read `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Envelope shared by every list endpoint (search, videos, channels)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

/// Identifies what a search result points at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    pub fn default_url(&self) -> Option<&str> {
        self.default
            .as_ref()
            .map(|t| t.url.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn high_url(&self) -> Option<&str> {
        self.high
            .as_ref()
            .map(|t| t.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Snippet block shared by search results, videos and channels.
/// Channels leave the channel-specific fields empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_title: String,
    pub published_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnails: Thumbnails,
    pub live_broadcast_content: Option<String>,
}

/// A search hit before enrichment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResultStub {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ResourceId,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: Snippet,
}

impl SearchResultStub {
    /// Video id, if this stub is a non-empty video reference
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.id.channel_id.as_deref().filter(|id| !id.is_empty())
    }
}

fn parse_count(raw: Option<&String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Counts arrive as decimal strings; accessors parse them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
}

impl VideoStatistics {
    pub fn views(&self) -> Option<u64> {
        parse_count(self.view_count.as_ref())
    }

    pub fn likes(&self) -> Option<u64> {
        parse_count(self.like_count.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDetails {
    /// ISO-8601 duration such as `PT4M13S`
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

impl VideoDetail {
    /// Channel id of the uploader, when the response carried one
    pub fn channel_id(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .map(|s| s.channel_id.as_str())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelStatistics {
    pub subscriber_count: Option<String>,
    pub video_count: Option<String>,
    pub view_count: Option<String>,
}

impl ChannelStatistics {
    pub fn subscribers(&self) -> Option<u64> {
        parse_count(self.subscriber_count.as_ref())
    }

    pub fn videos(&self) -> Option<u64> {
        parse_count(self.video_count.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
}

impl ChannelDetail {
    pub fn title(&self) -> &str {
        self.snippet.as_ref().map(|s| s.title.as_str()).unwrap_or("")
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.snippet.as_ref().and_then(|s| s.thumbnails.default_url())
    }
}

/// channelId → default avatar URL
pub type ThumbnailMap = HashMap<String, String>;

/// A stub merged with whatever enrichment data was found for it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichedVideo {
    pub stub: SearchResultStub,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<ContentDetails>,
    pub channel_thumbnail: Option<String>,
}

impl From<SearchResultStub> for EnrichedVideo {
    fn from(stub: SearchResultStub) -> Self {
        Self {
            stub,
            ..Default::default()
        }
    }
}
