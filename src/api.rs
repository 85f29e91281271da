use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::models::{ExecutionCreate, ExecutionRecord, LastPerformance, TrainingSession};

/// Thin client over the coaching backend. All persistence and business rules
/// live server-side; this only moves JSON.
pub struct Api {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl Api {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("GET {path} returned {status}: {body}");
        }
        res.json().await.with_context(|| format!("Invalid response body from {path}"))
    }

    /// Training sessions assigned to the authenticated student.
    pub async fn fetch_agenda(&self) -> Result<Vec<TrainingSession>> {
        self.get_json("/planos/aluno/agenda").await
    }

    /// Most recent recorded performance per exercise.
    pub async fn fetch_last_performed(&self) -> Result<Vec<LastPerformance>> {
        self.get_json("/execucoes/minhas/ultimos_exercicios").await
    }

    /// The student's execution history, for display only.
    pub async fn fetch_executions(&self) -> Result<Vec<ExecutionRecord>> {
        self.get_json("/execucoes/minhas").await
    }

    /// Record a finished session. Single-shot write, no retry; the caller
    /// decides how to surface a failure.
    pub async fn submit_execution(&self, payload: &ExecutionCreate) -> Result<()> {
        let url = format!("{}/execucoes", self.base_url);
        let res = self
            .authorize(self.client.post(&url))
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("POST /execucoes returned {status}: {body}");
        }
        Ok(())
    }
}
