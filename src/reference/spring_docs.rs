//! docs.spring.io reference source

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::config::DocsConfig;
use crate::reference::error::FetchError;
use crate::reference::source::ReferenceSource;
use crate::reference::table::{parse_packages, parse_properties};
use crate::reference::types::{DocsScheme, ReferencePackage, ReferenceProperty, TableKind};

/// Retired documentation pages redirect here
const REDIRECT_PAGE: &str = "redirect.html";

/// Fetches reference tables from the Spring Boot documentation site
pub struct SpringDocsSource {
    client: Client,
    base_url: String,
}

impl SpringDocsSource {
    /// Creates a source for the given base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("boot-version-check/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &DocsConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// URL of a reference page under the given scheme
    pub fn page_url(&self, scheme: DocsScheme, kind: TableKind, release: &str) -> String {
        match scheme {
            DocsScheme::Legacy => format!(
                "{}/spring-boot/docs/{}/reference/html/dependency-versions.html",
                self.base_url, release
            ),
            DocsScheme::Appendix => format!(
                "{}/spring-boot/{}/appendix/dependency-versions/{}.html",
                self.base_url,
                release.replace(".x", ""),
                kind.appendix_page()
            ),
        }
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!("Fetching Spring Boot reference page: {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Legacy pages either 404 or redirect to a placeholder once retired
    fn is_retired(response: &Response) -> bool {
        response.status() == StatusCode::NOT_FOUND
            || response.url().as_str().contains(REDIRECT_PAGE)
    }

    /// Fetch the page holding `kind` for `release`, falling back to the appendix scheme
    async fn fetch_page(
        &self,
        kind: TableKind,
        release: &str,
    ) -> Result<(DocsScheme, String), FetchError> {
        let legacy = self
            .get(&self.page_url(DocsScheme::Legacy, kind, release))
            .await?;

        let (scheme, response) = if Self::is_retired(&legacy) {
            let url = self.page_url(DocsScheme::Appendix, kind, release);
            (DocsScheme::Appendix, self.get(&url).await?)
        } else {
            (DocsScheme::Legacy, legacy)
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(format!("{} {}", kind, release)));
        }

        if !status.is_success() {
            warn!(
                "Spring Boot docs returned status {}: {}",
                status,
                response.url()
            );
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok((scheme, body))
    }
}

#[async_trait::async_trait]
impl ReferenceSource for SpringDocsSource {
    async fn fetch_dependencies(
        &self,
        release: &str,
    ) -> Result<Vec<ReferencePackage>, FetchError> {
        let kind = TableKind::Dependencies;
        let (scheme, body) = self.fetch_page(kind, release).await?;
        let packages = parse_packages(&body, scheme.body_index(kind))?;

        debug!(
            "Found {} managed dependencies for Spring Boot {}",
            packages.len(),
            release
        );

        Ok(packages)
    }

    async fn fetch_properties(&self, release: &str) -> Result<Vec<ReferenceProperty>, FetchError> {
        let kind = TableKind::Properties;
        let (scheme, body) = self.fetch_page(kind, release).await?;
        let properties = parse_properties(&body, scheme.body_index(kind))?;

        debug!(
            "Found {} version properties for Spring Boot {}",
            properties.len(),
            release
        );

        Ok(properties)
    }
}
