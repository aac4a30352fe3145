pub mod channel;
pub mod feed;
pub mod search;
pub mod video;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::detail::load_feed;
use crate::error::Result;
use crate::render;
use crate::view::Screen;

/// Wait for a screen's loader. On Ctrl-C the screen is dropped, so the
/// still-running loader can no longer write into it, and `None` is returned.
async fn drive<T>(screen: Screen, loader: JoinHandle<T>) -> Result<Option<(Screen, T)>> {
    tokio::select! {
        joined = loader => Ok(Some((screen, joined?))),
        _ = tokio::signal::ctrl_c() => {
            drop(screen);
            eprintln!("Interrupted.");
            Ok(None)
        }
    }
}

/// Shared body of the feed and search commands
async fn show_results(api: &ApiClient, query: &str, heading: &str) -> Result<()> {
    let screen = Screen::new();
    let videos = screen.slot();

    let loader = {
        let api = api.clone();
        let query = query.to_string();
        let videos = videos.clone();
        tokio::spawn(async move { load_feed(&api, &query, &videos).await })
    };

    let Some((_screen, loaded)) = drive(screen, loader).await? else {
        return Ok(());
    };
    loaded?;

    println!("{}\n", heading);
    print!("{}", render::results(&videos.get(), Utc::now()));
    Ok(())
}
