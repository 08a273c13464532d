use anyhow::{Context, Result};
use sbox_engine::{Page, PageSource, escape_path_segment};
use serde::Deserialize;

/// Reads pages over the Scrapbox HTTP API.
#[derive(Default)]
pub struct HttpPageSource {
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct PageList {
    pages: Vec<PageSummary>,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    title: String,
}

impl HttpPageSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl PageSource for HttpPageSource {
    fn fetch_text(&self, page: &Page) -> Result<String> {
        let url = page_text_url(page);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()?;
        Ok(response.text()?)
    }

    fn list_pages(&self, server: &str, project: &str, limit: usize) -> Result<Vec<String>> {
        let url = page_list_url(server, project, limit);
        log::debug!("GET {url}");
        let list: PageList = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()?
            .json()
            .context("unexpected page list response")?;
        Ok(list.pages.into_iter().map(|p| p.title).collect())
    }
}

fn api_base(server: &str, project: &str) -> String {
    format!(
        "{}/api/pages/{}",
        server.trim_end_matches('/'),
        escape_path_segment(project)
    )
}

fn page_text_url(page: &Page) -> String {
    format!(
        "{}/{}/text",
        api_base(&page.server, &page.project),
        escape_path_segment(&page.name)
    )
}

fn page_list_url(server: &str, project: &str, limit: usize) -> String {
    format!("{}?limit={limit}", api_base(server, project))
}
