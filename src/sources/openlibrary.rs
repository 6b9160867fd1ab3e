use anyhow::{Context, bail};

use crate::{config::Config, schema::SubjectResponse, util};

use super::adapter::SubjectSource;

/// Open Library subjects API source
///
/// HTTP:
/// GET {base_url}/{subject}.json?limit={limit}
///
/// Notes:
/// - No authentication headers, no request body
/// - No timeout is configured; the client default applies
/// - One shared `reqwest::Client` for all subjects
pub struct OpenLibrarySource {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
}

impl OpenLibrarySource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            limit: config.limit,
        }
    }

    pub fn url_for(&self, subject: &str) -> String {
        util::subject_url(&self.base_url, subject, self.limit)
    }
}

#[async_trait::async_trait]
impl SubjectSource for OpenLibrarySource {
    fn name(&self) -> &'static str {
        "openlibrary"
    }

    async fn fetch_subject(&self, subject: &str) -> anyhow::Result<SubjectResponse> {
        let url = self.url_for(subject);
        log::debug!("[{}] GET {}", self.name(), url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request for subject '{}' failed ({})", subject, url))?;

        let status = response.status();
        log::debug!("[{}] {} -> {}", self.name(), url, status);

        if !status.is_success() {
            bail!("subject '{}' returned HTTP {} ({})", subject, status, url);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body for subject '{}'", subject))?;

        let parsed: SubjectResponse = serde_json::from_str(&body)
            .with_context(|| format!("malformed JSON for subject '{}' ({})", subject, url))?;

        log::debug!(
            "[{}] subject '{}' returned {} works",
            self.name(),
            subject,
            parsed.works.len()
        );

        Ok(parsed)
    }
}
