use chrono::{DateTime, Utc};

use crate::format::{format_count, format_duration, format_thousands, format_view_count, time_ago_at};
use crate::models::{ChannelDetail, EnrichedVideo, SearchResultStub, VideoDetail};
use crate::view::Loadable;

const TITLE_WIDTH: usize = 60;
const LOADING: &str = "Loading...\n";

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn subscribers(count: u64) -> String {
    format!("{} subscribers", format_count(count).trim_end())
}

/// Join lines, each terminated by a newline
fn block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Card for one video search hit
pub fn video_card(index: usize, video: &EnrichedVideo, now: DateTime<Utc>) -> String {
    let snippet = &video.stub.snippet;

    let duration = format_duration(
        video
            .content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref()),
        snippet.live_broadcast_content.as_deref().unwrap_or(""),
    );
    let duration = if duration.is_empty() {
        String::new()
    } else {
        format!(" [{}]", duration)
    };

    let views = video
        .statistics
        .as_ref()
        .and_then(|s| s.views())
        .map(format_view_count)
        .unwrap_or_default();
    let published = snippet
        .published_at
        .as_deref()
        .map(|ts| time_ago_at(ts, now))
        .unwrap_or_default();

    let mut lines = vec![
        format!("{}. {}{}", index, truncate(&snippet.title, TITLE_WIDTH), duration),
        format!("   {}", snippet.channel_title),
        format!("   {} - {}", views, published),
    ];
    if let Some(id) = video.stub.video_id() {
        lines.push(format!("   {}", watch_url(id)));
    }
    block(lines)
}

/// Card for a channel that appears among search results
pub fn channel_result_card(index: usize, stub: &SearchResultStub) -> String {
    let mut lines = vec![format!("{}. [channel] {}", index, stub.snippet.title)];
    if let Some(id) = stub.channel_id() {
        lines.push(format!("   streamwave channel {}", id));
    }
    block(lines)
}

/// All displayable results. Videos need an id and a thumbnail to be shown.
pub fn results(videos: &Loadable<Vec<EnrichedVideo>>, now: DateTime<Utc>) -> String {
    let Some(videos) = videos.ready() else {
        return LOADING.to_string();
    };

    let mut out = String::new();
    let mut index = 0;
    for video in videos {
        if video.stub.video_id().is_some() && video.stub.snippet.thumbnails.high_url().is_some() {
            index += 1;
            out.push_str(&video_card(index, video, now));
            out.push('\n');
        } else if video.stub.channel_id().is_some() {
            index += 1;
            out.push_str(&channel_result_card(index, &video.stub));
            out.push('\n');
        }
    }

    if index == 0 {
        out.push_str("No videos found.\n");
    }
    out
}

/// Header of the channel screen
pub fn channel_header(channel: &Loadable<ChannelDetail>) -> String {
    let Some(channel) = channel.ready() else {
        return LOADING.to_string();
    };

    let mut lines = vec![channel.title().to_string()];
    if let Some(stats) = &channel.statistics {
        if let Some(subs) = stats.subscribers() {
            lines.push(subscribers(subs));
        }
        if let Some(videos) = stats.videos() {
            lines.push(format!("{} videos", format_thousands(videos)));
        }
    }
    if let Some(url) = channel.thumbnail_url() {
        lines.push(format!("Avatar: {}", url));
    }
    block(lines)
}

/// Header of the video screen: title, channel line and counts
pub fn video_header(video: &Loadable<VideoDetail>, channel: &Loadable<ChannelDetail>) -> String {
    let Some(video) = video.ready() else {
        return LOADING.to_string();
    };

    let snippet = video.snippet.clone().unwrap_or_default();
    let subs = channel
        .ready()
        .and_then(|c| c.statistics.as_ref())
        .and_then(|s| s.subscribers())
        .map(subscribers);

    let mut lines = vec![snippet.title.clone(), watch_url(&video.id)];
    lines.push(match subs {
        Some(subs) => format!("{} ({})", snippet.channel_title, subs),
        None => snippet.channel_title.clone(),
    });

    if let Some(stats) = &video.statistics {
        let views = stats.views().map(format_thousands).unwrap_or_default();
        let likes = stats.likes().map(format_thousands).unwrap_or_default();
        lines.push(format!("{} views   {} likes", views, likes));
    }
    block(lines)
}
