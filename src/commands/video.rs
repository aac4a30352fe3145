use chrono::Utc;

use crate::api::ApiClient;
use crate::detail::{VideoScreen, load_video_screen};
use crate::error::Result;
use crate::render;
use crate::view::Screen;

pub async fn run(api: &ApiClient, video_id: &str) -> Result<()> {
    eprintln!("Fetching video {}...", video_id);

    let screen = Screen::new();
    let state = VideoScreen::new(&screen);

    let loader = {
        let api = api.clone();
        let video_id = video_id.to_string();
        let state = state.clone();
        tokio::spawn(async move { load_video_screen(&api, &video_id, &state).await })
    };

    if super::drive(screen, loader).await?.is_none() {
        return Ok(());
    }

    print!("{}", render::video_header(&state.video.get(), &state.channel.get()));
    if state.video.is_loading() {
        eprintln!("Video details did not arrive; run with -v to see why.");
    }

    println!("\nRelated videos\n");
    print!("{}", render::results(&state.related.get(), Utc::now()));
    Ok(())
}
