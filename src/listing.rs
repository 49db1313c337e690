//! Metadata scraper for the paginated IRS PDF listing
//!
//! Every listing page carries its rows in the second `<table>`. The first
//! link in a row is the PDF filename and the fourth cell holds the
//! description (which usually starts with the revision year).
//!
//! Rows come in two shapes. Once Tablesaw's script has run, every cell's
//! content is wrapped in a `.tablesaw-cell-content` span. The markup served
//! over plain HTTP has bare `<td>` cells instead.

use crate::config::Config;
use crate::errors::FormsError;
use crate::metadata;
use crate::models::FormRecord;
use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

static TABLE: Lazy<Selector> = Lazy::new(|| selector("table"));
static ROW: Lazy<Selector> = Lazy::new(|| selector("tr"));
static CELL: Lazy<Selector> = Lazy::new(|| selector("td"));
static CELL_LINK: Lazy<Selector> = Lazy::new(|| selector(".tablesaw-cell-content a"));
static CELL_CONTENT: Lazy<Selector> = Lazy::new(|| selector(".tablesaw-cell-content"));
static PLAIN_LINK: Lazy<Selector> = Lazy::new(|| selector("td a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}

/// A source of listing pages, addressed by zero-based page number.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<String, FormsError>;
}

pub struct HttpListingSource {
    client: Client,
    listing_url: String,
}

impl HttpListingSource {
    pub fn new(client: Client, listing_url: impl Into<String>) -> Self {
        Self {
            client,
            listing_url: listing_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.http_client()?, config.listing_url.clone()))
    }

    pub fn page_url(&self, page: u32) -> Result<String, FormsError> {
        let mut url = reqwest::Url::parse(&self.listing_url)
            .map_err(|e| FormsError::InvalidUrl(format!("{}: {}", self.listing_url, e)))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url.to_string())
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_page(&self, page: u32) -> Result<String, FormsError> {
        let url = self.page_url(page)?;
        debug!("Fetching listing page {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormsError::HttpStatus {
                status_code: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

fn cell_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract `(filename, description)` rows from one listing page.
///
/// Rows without a link, with fewer than four cells, or whose link does not
/// name a `.pdf` are dropped. A page without a second table yields nothing.
pub fn parse_listing_page(html: &str) -> Vec<FormRecord> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&TABLE).nth(1) else {
        return Vec::new();
    };

    table
        .select(&ROW)
        .filter_map(parse_row)
        .filter(|record| record.filename.ends_with(".pdf"))
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<FormRecord> {
    let rendered = row.select(&CELL_CONTENT).next().is_some();
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();

    let (filename, description) = if rendered {
        let filename = cell_text(row.select(&CELL_LINK).next()?);
        let description = cells
            .get(3)?
            .select(&CELL_CONTENT)
            .next()
            .map(cell_text)
            .unwrap_or_default();
        (filename, description)
    } else {
        let filename = cell_text(row.select(&PLAIN_LINK).next()?);
        (filename, cell_text(*cells.get(3)?))
    };

    Some(FormRecord {
        filename,
        description,
    })
}

/// Walk pages `0..pages`, collect every row and write the catalog to
/// `out_path`. Returns the number of records saved.
pub async fn scrape_metadata<L: ListingSource>(
    source: &L,
    pages: u32,
    out_path: &Path,
) -> Result<usize> {
    let mut records = Vec::new();

    for page in 0..pages {
        print!("  Scraping page {}/{}...\r", page + 1, pages);
        std::io::stdout().flush()?;

        let html = source.fetch_page(page).await?;
        let rows = parse_listing_page(&html);
        debug!("Page {} yielded {} rows", page, rows.len());
        records.extend(rows);
    }

    println!();
    println!("Scraped {} total PDF entries.", records.len());

    metadata::save_metadata(out_path, &records)?;
    println!("Saved to {}", out_path.display());
    info!("Scraped {} records across {} pages", records.len(), pages);

    Ok(records.len())
}
