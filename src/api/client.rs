use std::time::Duration;

use anyhow::{Context, Result};

use super::models::{DailyPlanResponse, ItemListResponse, SaveUrlRequest, StoredItemResponse};

/// Thin client for the Smart Brain REST API.
#[derive(Debug, Clone)]
pub struct BrainClient {
    http: reqwest::Client,
    base_url: String,
}

impl BrainClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("smartbrain")
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/api/v1/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    pub async fn fetch_daily_plan(&self) -> Result<DailyPlanResponse> {
        let url = format!("{}/api/v1/tasks/daily-plan", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;

        response
            .json()
            .await
            .context("malformed daily plan response")
    }

    /// Tell the server a task is done. Response body is unused.
    pub async fn complete_task(&self, task_id: &str) -> Result<()> {
        let url = format!("{}/api/v1/tasks/{}/complete", self.base_url, task_id);
        self.http.post(&url).send().await?.error_for_status()?;
        Ok(())
    }

    pub async fn save_url(&self, request: &SaveUrlRequest) -> Result<StoredItemResponse> {
        let url = format!("{}/api/v1/items/urls", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        response.json().await.context("malformed save response")
    }

    pub async fn search_items(&self, query: &str, limit: usize) -> Result<Vec<StoredItemResponse>> {
        let url = format!("{}/api/v1/items", self.base_url);
        let limit = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let list: ItemListResponse = response
            .json()
            .await
            .context("malformed item list response")?;

        Ok(list.items)
    }
}
