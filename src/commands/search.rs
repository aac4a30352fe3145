use crate::api::ApiClient;
use crate::error::{Error, Result};

pub async fn run(api: &ApiClient, term: &str) -> Result<()> {
    let term = term.trim();
    if term.is_empty() {
        return Err(Error::InvalidInput("search term must not be blank".to_string()));
    }

    eprintln!("Searching for: {}", term);
    super::show_results(api, term, &format!("Search results for: {}", term)).await
}
