// src/directory/client.rs
use crate::directory::models::{Category, CategoryLink, CategoryName, CompanyRecord};
use crate::extractors::{category, company};
use crate::utils::error::{AppError, DirectoryError};
use reqwest::{header, Url};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.oilandgasnewsworldwide.com";
/// Listing page that links to every category
pub const LISTING_PATH: &str = "/OGNDirectory";
const DEFAULT_USER_AGENT: &str = concat!("ogn_directory/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the directory site.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Sequential client for the directory: one GET at a time, no retries.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, DirectoryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| DirectoryError::InvalidUrl(config.base_url.clone()))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a site-relative path (or absolute URL) against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, DirectoryError> {
        self.base_url
            .join(path)
            .map_err(|_| DirectoryError::InvalidUrl(path.to_string()))
    }

    /// Downloads a page and returns its body.
    ///
    /// Transport failures are logged and returned; nothing is retried.
    pub async fn fetch(&self, path: &str) -> Result<String, DirectoryError> {
        let url = self.resolve(path)?;
        tracing::debug!("Fetching {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "text/html,*/*")
            .send()
            .await
            .map_err(|e| classify_transport_error(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            return Err(DirectoryError::Http { url: url.to_string(), status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(url.as_str(), e))?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }

    /// Category page paths from the listing page, in document order.
    pub async fn list_category_links(&self) -> Result<Vec<CategoryLink>, DirectoryError> {
        let html = self.fetch(LISTING_PATH).await?;
        let links = category::parse_category_links(&html);
        tracing::info!("Found {} category links", links.len());
        Ok(links)
    }

    /// Category display names from the listing page. Fetches the page again.
    pub async fn list_category_names(&self) -> Result<Vec<CategoryName>, DirectoryError> {
        let html = self.fetch(LISTING_PATH).await?;
        let names = category::parse_category_names(&html);
        tracing::info!("Found {} category names", names.len());
        Ok(names)
    }

    /// Names and links from a single listing fetch.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DirectoryError> {
        let html = self.fetch(LISTING_PATH).await?;
        let categories = category::parse_categories(&html);
        tracing::info!("Found {} categories", categories.len());
        Ok(categories)
    }

    /// Fetches one category page and parses every company on it.
    pub async fn extract_companies(&self, category_path: &str) -> Result<Vec<CompanyRecord>, AppError> {
        tracing::info!("Extracting companies from {}", category_path);
        let html = self.fetch(category_path).await?;
        let companies = company::parse_companies(&html)?;
        tracing::info!("Extracted {} companies from {}", companies.len(), category_path);
        Ok(companies)
    }
}

/// Maps a reqwest failure to the directory error taxonomy, logging each kind
/// with its own message.
fn classify_transport_error(url: &str, err: reqwest::Error) -> DirectoryError {
    if err.is_timeout() {
        tracing::error!("Request timed out: {}", url);
        DirectoryError::Timeout { url: url.to_string() }
    } else if err.is_redirect() {
        tracing::error!("Too many redirects, URL is probably bad: {}", url);
        DirectoryError::TooManyRedirects { url: url.to_string() }
    } else {
        tracing::error!("Request failed for {}: {}", url, err);
        DirectoryError::Request { url: url.to_string(), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn client_for(base_url: &str, timeout: Duration) -> DirectoryClient {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            timeout,
            ..Default::default()
        };
        DirectoryClient::new(&config).expect("client should build")
    }

    const LISTING_HTML: &str = r#"<html><body>
        <a class="fontLinkDirectory" href="/Directory/AIPO/Air_Pollution_Control_">Air Pollution Control (2)</a>
        <a class="fontLinkDirectory" href="/Directory/OSRE/Oil_Spill_Response">Oil Spill Response (5)</a>
        </body></html>"#;

    const CATEGORY_HTML: &str = r#"<html><body>
        <h3 class="fontsubsection nomarginpadding lmargin opensans">Gulf Air Systems</h3>
        <div><table>
          <tr><td>City:</td><td>Houston</td><td>Country:</td><td>USA</td></tr>
          <tr><td>Phone:</td><td>+1 713 555 0100</td></tr>
          <tr><td>Address:</td><td>200 Louisiana St</td></tr>
        </table></div>
        </body></html>"#;

    #[test]
    fn test_resolve_relative_paths() {
        let client = client_for("https://www.oilandgasnewsworldwide.com", Duration::from_secs(5));
        assert_eq!(
            client.resolve("/Directory/AIPO/Air_Pollution_Control_").unwrap().as_str(),
            "https://www.oilandgasnewsworldwide.com/Directory/AIPO/Air_Pollution_Control_"
        );
        assert_eq!(
            client.resolve(LISTING_PATH).unwrap().as_str(),
            "https://www.oilandgasnewsworldwide.com/OGNDirectory"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ClientConfig { base_url: "not a url".to_string(), ..Default::default() };
        assert!(matches!(DirectoryClient::new(&config), Err(DirectoryError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_listing_links_and_names_fetch_separately() {
        let mut server = mockito::Server::new_async().await;
        let listing = server
            .mock("GET", LISTING_PATH)
            .with_status(200)
            .with_body(LISTING_HTML)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        let links = assert_ok!(client.list_category_links().await);
        let names = assert_ok!(client.list_category_names().await);

        assert_eq!(links, vec!["/Directory/AIPO/Air_Pollution_Control_", "/Directory/OSRE/Oil_Spill_Response"]);
        assert_eq!(names, vec!["Air Pollution Control", "Oil Spill Response"]);
        listing.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_companies_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/Directory/AIPO/Air_Pollution_Control_")
            .with_status(200)
            .with_body(CATEGORY_HTML)
            .create_async()
            .await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        let companies = assert_ok!(client.extract_companies("/Directory/AIPO/Air_Pollution_Control_").await);

        assert_eq!(companies.len(), 1);
        let record = &companies[0];
        assert_eq!(record.company_name, "Gulf Air Systems");
        assert_eq!(record.city.as_deref(), Some("Houston"));
        assert_eq!(record.country.as_deref(), Some("USA"));
        assert_eq!(record.phones, vec!["+17135550100".to_string()]);
        assert_eq!(record.address, "200 Louisiana St");
    }

    #[tokio::test]
    async fn test_category_without_headings_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/Directory/EMPT/Empty")
            .with_status(200)
            .with_body("<html><body><p>Nothing listed yet</p></body></html>")
            .create_async()
            .await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        let companies = assert_ok!(client.extract_companies("/Directory/EMPT/Empty").await);
        assert!(companies.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", LISTING_PATH).with_status(404).create_async().await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        match client.list_category_links().await {
            Err(DirectoryError::Http { status, .. }) => assert_eq!(status, reqwest::StatusCode::NOT_FOUND),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_redirect_loop_is_classified() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/loop")
            .with_status(302)
            .with_header("location", "/loop")
            .create_async()
            .await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        let err = assert_err!(client.fetch("/loop").await);
        assert!(matches!(err, DirectoryError::TooManyRedirects { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_timeout_is_classified() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    held.push(socket);
                }
            }
        });

        let client = client_for(&format!("http://{}", addr), Duration::from_millis(200));
        let err = assert_err!(client.fetch(LISTING_PATH).await);
        assert!(matches!(err, DirectoryError::Timeout { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_missing_metadata_block_surfaces_as_extraction_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/Directory/BAD/Broken")
            .with_status(200)
            .with_body(r#"<div><h3 class="fontsubsection nomarginpadding lmargin opensans">Orphan Ltd</h3></div>"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), Duration::from_secs(5));
        let err = assert_err!(client.extract_companies("/Directory/BAD/Broken").await);
        assert!(matches!(err, AppError::Extraction(_)), "got {:?}", err);
    }
}
