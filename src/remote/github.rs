use super::{LabelApi, LabelPatch, NewLabel, RemoteLabel};
use crate::repo::GHRepo;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, Method, RequestBuilder, Response};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
    repo: GHRepo,
    access_token: String,
}

impl GitHubClient {
    pub fn new(repo: GHRepo, access_token: String) -> AppResult<Self> {
        Self::with_base_url(GITHUB_API_BASE, repo, access_token)
    }

    pub fn with_base_url(base_url: &str, repo: GHRepo, access_token: String) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(format!("dependalabels/{}", crate::VERSION))
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            base_url: base_url.trim_end_matches('/').to_string(),
            repo,
            access_token,
        })
    }

    pub fn repo(&self) -> &GHRepo {
        &self.repo
    }

    fn labels_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/labels",
            self.base_url, self.repo.owner, self.repo.name
        )
    }

    fn label_url(&self, name: &str) -> String {
        format!("{}/{}", self.labels_url(), urlencoding::encode(name))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/vnd.github+json")
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> AppResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to {}: {}", action, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!(
                "Failed to {}: {} - {}",
                action, status, error_text
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl LabelApi for GitHubClient {
    async fn list_labels(&self) -> AppResult<Vec<RemoteLabel>> {
        let action = format!("list labels for {}", self.repo);
        let mut labels = Vec::new();
        let mut url = Some(format!("{}?per_page={}", self.labels_url(), PER_PAGE));

        while let Some(page_url) = url.take() {
            let response = self
                .send(self.request(Method::GET, &page_url), &action)
                .await?;

            url = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let page: Vec<RemoteLabel> = response.json().await.map_err(|e| {
                AppError::Remote(format!("Failed to parse label listing: {}", e))
            })?;
            labels.extend(page);
        }

        Ok(labels)
    }

    async fn create_label(&self, label: &NewLabel) -> AppResult<RemoteLabel> {
        let action = format!("create '{}' label", label.name);
        let response = self
            .send(
                self.request(Method::POST, &self.labels_url()).json(label),
                &action,
            )
            .await?;

        response.json().await.map_err(|e| {
            AppError::Remote(format!(
                "Failed to parse create response for '{}': {}",
                label.name, e
            ))
        })
    }

    async fn update_label(&self, name: &str, patch: &LabelPatch) -> AppResult<()> {
        let action = format!("update '{}' label", name);
        self.send(
            self.request(Method::PATCH, &self.label_url(name)).json(patch),
            &action,
        )
        .await?;
        Ok(())
    }
}

/// Extract the `rel="next"` target from an RFC 8288 `Link` header
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;
        let is_next = parts.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
                .unwrap_or(false)
        });
        is_next.then(|| target.to_string())
    })
}
