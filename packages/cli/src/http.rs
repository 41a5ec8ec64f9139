//! HTTP client wrapper for fetching HTML pages.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use webtools_capture::config::{DEFAULT_MARKUP_ENCODING, MEDIA_TYPE_TEXT_HTML};
use webtools_capture::{parse_html_bytes, Value};

use crate::config::FetchConfig;
use crate::error::{CliError, Result};

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("webtools/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Content-Type parameter naming the body encoding.
const CHARSET_PARAM: &str = "charset";

/// Create a configured HTTP client.
pub fn create_client(config: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// A parsed `Content-Type` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Lowercased media type, e.g. `text/html`.
    pub media_type: String,
    /// The `charset` parameter, if present and non-empty.
    pub charset: Option<String>,
}

impl ContentType {
    /// Parse a header value such as `text/html; charset="utf-8"`.
    ///
    /// Parameter parsing is mailparse's. Only a declared `charset` is kept:
    /// mailparse reports `us-ascii` for a missing one, which would override
    /// the UTF-8 default for markup.
    ///
    /// # Examples
    /// ```
    /// use webtools_cli::http::ContentType;
    ///
    /// let ct = ContentType::parse("Text/HTML; Charset=\"ISO-8859-1\"");
    /// assert_eq!(ct.media_type, "text/html");
    /// assert_eq!(ct.charset.as_deref(), Some("ISO-8859-1"));
    /// ```
    pub fn parse(header: &str) -> Self {
        let parsed = mailparse::parse_content_type(header);

        let charset = parsed
            .params
            .get(CHARSET_PARAM)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            media_type: parsed.mimetype.trim().to_string(),
            charset,
        }
    }

    pub fn is_html(&self) -> bool {
        self.media_type == MEDIA_TYPE_TEXT_HTML
    }
}

/// A downloaded response body with its declared content type.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub content_type: Option<ContentType>,
    pub body: Vec<u8>,
}

/// Download a page with retry logic, asking for HTML.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). Client errors are returned immediately.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Maximum response body size in bytes
pub fn download_page(client: &Client, url: &str, max_size: u64) -> Result<FetchedPage> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).header(ACCEPT, MEDIA_TYPE_TEXT_HTML).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response.error_for_status()?;
                return read_page(response, max_size);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(CliError::Http(e));
            }
        }
    }

    Err(CliError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Read a response body, enforcing the size limit.
///
/// A declared `Content-Length` above the limit fails before the body is read;
/// otherwise reading stops one byte past the limit.
fn read_page(response: Response, max_size: u64) -> Result<FetchedPage> {
    if let Some(length) = response.content_length() {
        if length > max_size {
            return Err(CliError::ResponseTooLarge {
                size: length,
                limit: max_size,
            });
        }
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ContentType::parse);

    let mut body = Vec::new();
    response
        .take(max_size.saturating_add(1))
        .read_to_end(&mut body)?;

    let size = body.len() as u64;
    if size > max_size {
        return Err(CliError::ResponseTooLarge {
            size,
            limit: max_size,
        });
    }

    Ok(FetchedPage { content_type, body })
}

/// Fetch a page and resolve the captures of `parameters` against it.
///
/// # Returns
/// The capture result, or `Undefined` when the response is not `text/html`.
/// The body is decoded with the response charset, UTF-8 by default.
pub fn fetch_html(
    client: &Client,
    url: &str,
    parameters: &Value,
    config: &FetchConfig,
) -> Result<Value> {
    let page = download_page(client, url, config.max_response_size)?;

    let Some(content_type) = page.content_type.filter(ContentType::is_html) else {
        tracing::debug!(url, "Response is not text/html, nothing to capture");
        return Ok(Value::Undefined);
    };

    tracing::debug!(
        url,
        bytes = page.body.len(),
        charset = content_type.charset.as_deref().unwrap_or(DEFAULT_MARKUP_ENCODING),
        "Fetched HTML page"
    );

    let result = parse_html_bytes(
        page.body.as_slice(),
        content_type.charset.as_deref(),
        parameters,
    )?;
    Ok(result)
}
