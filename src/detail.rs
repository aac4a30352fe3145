//! Single-entity lookups and the loaders that fill each screen.

use crate::api::{Endpoint, Fetch};
use crate::enrich::enrich_search_results;
use crate::error::{Disposition, FetchError, Stage, disposition};
use crate::models::{ChannelDetail, EnrichedVideo, SearchResultStub, VideoDetail};
use crate::view::{Screen, Slot};

/// Category shown when the feed is opened without one
pub const DEFAULT_CATEGORY: &str = "New";

pub fn video_detail_endpoint(video_id: &str) -> Endpoint {
    Endpoint::new("videos")
        .param("part", "snippet,statistics")
        .param("id", video_id)
}

pub fn channel_detail_endpoint(channel_id: &str) -> Endpoint {
    Endpoint::new("channels")
        .param("part", "snippet,statistics")
        .param("id", channel_id)
}

pub fn related_videos_endpoint(video_id: &str) -> Endpoint {
    Endpoint::new("search")
        .param("part", "snippet")
        .param("relatedToVideoId", video_id)
        .param("type", "video")
}

pub fn channel_videos_endpoint(channel_id: &str) -> Endpoint {
    Endpoint::new("search")
        .param("channelId", channel_id)
        .param("part", "snippet,id")
        .param("order", "date")
}

pub fn feed_endpoint(query: &str) -> Endpoint {
    Endpoint::new("search").param("part", "snippet").param("q", query)
}

pub async fn fetch_video_detail<A: Fetch>(
    api: &A,
    video_id: &str,
) -> Result<Option<VideoDetail>, FetchError> {
    let items: Vec<VideoDetail> = api.fetch_items(&video_detail_endpoint(video_id)).await?;
    Ok(items.into_iter().next())
}

pub async fn fetch_channel_detail<A: Fetch>(
    api: &A,
    channel_id: &str,
) -> Result<Option<ChannelDetail>, FetchError> {
    let items: Vec<ChannelDetail> = api.fetch_items(&channel_detail_endpoint(channel_id)).await?;
    Ok(items.into_iter().next())
}

pub async fn fetch_related_videos<A: Fetch>(
    api: &A,
    video_id: &str,
) -> Result<Vec<SearchResultStub>, FetchError> {
    api.fetch_items(&related_videos_endpoint(video_id)).await
}

pub async fn fetch_channel_videos<A: Fetch>(
    api: &A,
    channel_id: &str,
) -> Result<Vec<SearchResultStub>, FetchError> {
    api.fetch_items(&channel_videos_endpoint(channel_id)).await
}

/// Search results for a category name or free-text query
pub async fn fetch_feed<A: Fetch>(
    api: &A,
    query: &str,
) -> Result<Vec<SearchResultStub>, FetchError> {
    api.fetch_items(&feed_endpoint(query)).await
}

/// Log a detail-stage failure and turn it into absence
fn or_absent<T>(result: Result<T, FetchError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug_assert_eq!(disposition(Stage::Detail, err.kind()), Disposition::Degrade);
            tracing::warn!(error = %err, kind = ?err.kind(), "failed to fetch {}", what);
            None
        }
    }
}

/// State of the video screen
#[derive(Debug, Clone)]
pub struct VideoScreen {
    pub video: Slot<VideoDetail>,
    pub channel: Slot<ChannelDetail>,
    pub related: Slot<Vec<EnrichedVideo>>,
}

impl VideoScreen {
    pub fn new(screen: &Screen) -> Self {
        Self {
            video: screen.slot(),
            channel: screen.slot(),
            related: screen.slot(),
        }
    }
}

/// Fill the video screen.
///
/// A video detail without a snippet counts as not loaded.
/// The video detail and related videos load concurrently. The channel
/// lookup waits for the video detail and only runs when it names a channel.
pub async fn load_video_screen<A: Fetch>(api: &A, video_id: &str, state: &VideoScreen) {
    let video_and_channel = async {
        let Some(video) = or_absent(fetch_video_detail(api, video_id).await, "video details")
            .flatten()
            .filter(|v| v.snippet.is_some())
        else {
            tracing::info!(video_id, "no video details, screen stays loading");
            return;
        };

        let channel_id = video.channel_id().map(str::to_owned);
        if !state.video.apply(video) {
            return;
        }

        let Some(channel_id) = channel_id else {
            tracing::debug!(video_id, "video has no channel id");
            return;
        };
        if let Some(channel) =
            or_absent(fetch_channel_detail(api, &channel_id).await, "channel details").flatten()
        {
            state.channel.apply(channel);
        }
    };

    let related = async {
        if let Some(stubs) = or_absent(fetch_related_videos(api, video_id).await, "related videos") {
            let enriched = enrich_search_results(api, &stubs).await;
            state.related.apply(enriched);
        }
    };

    tokio::join!(video_and_channel, related);
}

/// State of the channel screen
#[derive(Debug, Clone)]
pub struct ChannelScreen {
    pub channel: Slot<ChannelDetail>,
    pub videos: Slot<Vec<EnrichedVideo>>,
}

impl ChannelScreen {
    pub fn new(screen: &Screen) -> Self {
        Self {
            channel: screen.slot(),
            videos: screen.slot(),
        }
    }
}

/// Fill the channel screen: channel detail first, then its latest uploads
pub async fn load_channel_screen<A: Fetch>(api: &A, channel_id: &str, state: &ChannelScreen) {
    if let Some(channel) =
        or_absent(fetch_channel_detail(api, channel_id).await, "channel details").flatten()
    {
        state.channel.apply(channel);
    }

    if let Some(stubs) = or_absent(fetch_channel_videos(api, channel_id).await, "channel videos") {
        let enriched = enrich_search_results(api, &stubs).await;
        state.videos.apply(enriched);
    }
}

/// Fill a feed or search-results slot.
///
/// The search request is the one thing the screen cannot do without, so its
/// failure is returned; enrichment failures still only degrade.
pub async fn load_feed<A: Fetch>(
    api: &A,
    query: &str,
    videos: &Slot<Vec<EnrichedVideo>>,
) -> Result<(), FetchError> {
    let stubs = match fetch_feed(api, query).await {
        Ok(stubs) => stubs,
        Err(err) => {
            debug_assert_eq!(disposition(Stage::Listing, err.kind()), Disposition::Surface);
            return Err(err);
        }
    };

    tracing::info!(query, results = stubs.len(), "search results received");
    let enriched = enrich_search_results(api, &stubs).await;
    videos.apply(enriched);
    Ok(())
}
