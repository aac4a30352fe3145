//! Best-effort enrichment of search results with video statistics,
//! content details and channel avatars.

use std::collections::{HashMap, HashSet};

use crate::api::{Endpoint, Fetch};
use crate::error::{Disposition, FetchError, Stage, disposition};
use crate::models::{ChannelDetail, EnrichedVideo, SearchResultStub, ThumbnailMap, VideoDetail};

/// Non-empty video ids, in stub order
pub fn video_ids(stubs: &[SearchResultStub]) -> Vec<&str> {
    stubs.iter().filter_map(SearchResultStub::video_id).collect()
}

/// Channel ids of every stub, without duplicates, in first-seen order
pub fn channel_ids(stubs: &[SearchResultStub]) -> Vec<&str> {
    let mut seen = HashSet::new();
    stubs
        .iter()
        .map(|s| s.snippet.channel_id.as_str())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .collect()
}

pub fn video_details_endpoint(ids: &[&str]) -> Endpoint {
    Endpoint::new("videos")
        .param("part", "contentDetails,snippet,statistics")
        .param("id", ids.join(","))
}

pub fn channel_thumbnails_endpoint(ids: &[&str]) -> Endpoint {
    Endpoint::new("channels")
        .param("part", "snippet")
        .param("id", ids.join(","))
}

async fn fetch_video_details<A: Fetch>(
    api: &A,
    ids: &[&str],
) -> Result<Vec<VideoDetail>, FetchError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    api.fetch_items(&video_details_endpoint(ids)).await
}

async fn fetch_channel_thumbnails<A: Fetch>(
    api: &A,
    ids: &[&str],
) -> Result<ThumbnailMap, FetchError> {
    if ids.is_empty() {
        return Ok(ThumbnailMap::new());
    }
    let channels: Vec<ChannelDetail> = api.fetch_items(&channel_thumbnails_endpoint(ids)).await?;
    Ok(thumbnail_map(&channels))
}

/// channelId → default thumbnail for every channel that has one
pub fn thumbnail_map(channels: &[ChannelDetail]) -> ThumbnailMap {
    channels
        .iter()
        .filter_map(|c| c.thumbnail_url().map(|url| (c.id.clone(), url.to_string())))
        .collect()
}

fn or_degraded<T: Default>(result: Result<T, FetchError>, what: &str) -> T {
    result.unwrap_or_else(|err| {
        debug_assert_eq!(
            disposition(Stage::Enrichment, err.kind()),
            Disposition::Degrade
        );
        tracing::warn!(error = %err, kind = ?err.kind(), "{} unavailable, continuing without them", what);
        T::default()
    })
}

/// Merge details and thumbnails onto stubs by exact id, keeping stub order.
/// Stubs without a matching detail are passed through unchanged.
pub fn merge(
    stubs: &[SearchResultStub],
    details: &[VideoDetail],
    thumbnails: &ThumbnailMap,
) -> Vec<EnrichedVideo> {
    let mut by_id: HashMap<&str, &VideoDetail> = HashMap::new();
    for detail in details {
        by_id.entry(detail.id.as_str()).or_insert(detail);
    }

    stubs
        .iter()
        .map(|stub| {
            let detail = stub.video_id().and_then(|id| by_id.get(id));
            EnrichedVideo {
                stub: stub.clone(),
                statistics: detail.and_then(|d| d.statistics.clone()),
                content_details: detail.and_then(|d| d.content_details.clone()),
                channel_thumbnail: thumbnails.get(&stub.snippet.channel_id).cloned(),
            }
        })
        .collect()
}

/// Enrich search results with two batched lookups.
///
/// Video details and channel thumbnails are fetched concurrently. Either
/// lookup failing only leaves its own data absent; this never fails.
/// An empty input yields an empty output without touching the network.
pub async fn enrich_search_results<A: Fetch>(
    api: &A,
    stubs: &[SearchResultStub],
) -> Vec<EnrichedVideo> {
    if stubs.is_empty() {
        return Vec::new();
    }

    let video_ids = video_ids(stubs);
    let channel_ids = channel_ids(stubs);

    let (details, thumbnails) = tokio::join!(
        fetch_video_details(api, &video_ids),
        fetch_channel_thumbnails(api, &channel_ids),
    );

    let details = or_degraded(details, "video details");
    let thumbnails = or_degraded(thumbnails, "channel thumbnails");

    tracing::debug!(
        stubs = stubs.len(),
        details = details.len(),
        thumbnails = thumbnails.len(),
        "enriched search results"
    );

    merge(stubs, &details, &thumbnails)
}
