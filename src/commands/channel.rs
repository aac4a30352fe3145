use chrono::Utc;

use crate::api::ApiClient;
use crate::detail::{ChannelScreen, load_channel_screen};
use crate::error::Result;
use crate::render;
use crate::view::Screen;

pub async fn run(api: &ApiClient, channel_id: &str) -> Result<()> {
    eprintln!("Fetching channel {}...", channel_id);

    let screen = Screen::new();
    let state = ChannelScreen::new(&screen);

    let loader = {
        let api = api.clone();
        let channel_id = channel_id.to_string();
        let state = state.clone();
        tokio::spawn(async move { load_channel_screen(&api, &channel_id, &state).await })
    };

    if super::drive(screen, loader).await?.is_none() {
        return Ok(());
    }

    print!("{}", render::channel_header(&state.channel.get()));
    if state.channel.is_loading() {
        eprintln!("Channel details did not arrive; run with -v to see why.");
    }

    println!("\nLatest videos\n");
    print!("{}", render::results(&state.videos.get(), Utc::now()));
    Ok(())
}
