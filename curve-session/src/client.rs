use crate::error::{CurveError, CurveResult};
use crate::params::InputParameters;
use crate::session::CurvePoint;

/// Client for the stress-strain calculation service
#[derive(Debug, Clone)]
pub struct CurveClient {
    base_url: String,
    client: reqwest::Client,
}

impl CurveClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Get the base URL for the client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a curve for the given parameters. One attempt, no retry.
    pub async fn calculate(&self, params: &InputParameters) -> CurveResult<Vec<CurvePoint>> {
        let url = format!("{}/calculate", self.base_url);
        let request = params.to_request();
        tracing::info!(
            "POST {} (model={}, points={})",
            url,
            request.model_type,
            request.num_points
        );

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Calculation service returned {}", status);
            return Err(CurveError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let points: Vec<CurvePoint> = response.json().await?;
        tracing::debug!("Received {} curve points", points.len());
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let client = CurveClient::new("http://localhost:8000//");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
