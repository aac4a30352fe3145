use crate::api::ApiClient;
use crate::error::Result;

pub async fn run(api: &ApiClient, category: &str) -> Result<()> {
    eprintln!("Loading {} videos...", category);
    super::show_results(api, category, &format!("{} videos", category)).await
}
