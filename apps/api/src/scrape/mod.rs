//! Careers-page loading — fetches a URL and reduces the HTML to its visible text.

use async_trait::async_trait;
use reqwest::{Client, Url};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info};

use crate::text::normalize_whitespace;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that break the flow of text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("page at {0} has no readable text")]
    EmptyPage(String),
}

/// A loaded page reduced to plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub source_url: String,
    pub content: String,
}

/// Loads a web page as text. Only the first document of a load is ever used.
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<PageDocument, FetchError>;
}

pub struct WebPageLoader {
    client: Client,
}

impl WebPageLoader {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageLoader for WebPageLoader {
    async fn load(&self, url: &str) -> Result<PageDocument, FetchError> {
        let parsed = parse_http_url(url)?;
        info!("Fetching careers page: {}", parsed);

        let response = self.client.get(parsed.clone()).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let html = response.text().await?;
        let content = visible_text(&html);
        if content.is_empty() {
            return Err(FetchError::EmptyPage(parsed.to_string()));
        }

        debug!("Scraped {} chars from {}", content.len(), parsed);
        Ok(PageDocument {
            source_url: parsed.to_string(),
            content,
        })
    }
}

/// Accepts only absolute http(s) URLs.
pub fn parse_http_url(url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// Extracts the human-visible text of an HTML document. Inline markup joins into the
/// surrounding sentence; block-level elements start a new line.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = Selector::parse("body")
        .ok()
        .and_then(|body| document.select(&body).next())
        .unwrap_or_else(|| document.root_element());

    let mut out = String::new();
    collect_text(root, &mut out);
    normalize_whitespace(&out)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_collapsed(out, text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if HIDDEN_ELEMENTS.contains(&name) {
            continue;
        }
        if name == "br" {
            out.push('\n');
            continue;
        }
        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push('\n');
        }
        collect_text(child, out);
        if block {
            out.push('\n');
        }
    }
}

/// Appends `text` with every whitespace run folded into one space.
fn push_collapsed(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !out.ends_with(|c: char| c == ' ' || c == '\n') {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
}
