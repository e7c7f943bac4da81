/// Changelog fetcher
///
/// One-shot download of the raw changelog text. No retries, no backoff:
/// a bad status or a dead network is reported upstream as-is and the
/// caller decides what to show the user.

use crate::error::{DeckError, Result};

/// Fetches raw changelog text over HTTP
pub struct ChangelogFetcher {
    client: reqwest::Client,
}

impl ChangelogFetcher {
    /// Create a new fetcher instance
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the raw changelog body from `url`.
    ///
    /// # Returns
    /// * `Ok(String)` - The response body on a success status
    /// * `Err(DeckError::FetchFailed)` - Non-success HTTP status, carries the code
    /// * `Err(DeckError::Network)` - Transport-level failure
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeckError::FetchFailed(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl Default for ChangelogFetcher {
    fn default() -> Self {
        Self::new()
    }
}
