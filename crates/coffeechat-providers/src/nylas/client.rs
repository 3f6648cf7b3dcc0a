//! Nylas API client.
//!
//! A low-level HTTP client for the Nylas v3 API: request building,
//! pagination, and response parsing. Listing endpoints return the
//! provider's data as-is; interpretation happens elsewhere.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::event::{Calendar, EventDraft, ProviderEvent};
use crate::nylas::config::NylasConfig;

/// Page size for list endpoints.
const PAGE_LIMIT: u32 = 50;

/// Nylas v3 API client.
#[derive(Debug)]
pub struct NylasClient {
    http_client: reqwest::Client,
    config: NylasConfig,
}

impl NylasClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: NylasConfig) -> ProviderResult<Self> {
        config.validate().map_err(ProviderError::configuration)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(base_headers())
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Lists every calendar on the grant.
    pub async fn list_calendars(&self) -> ProviderResult<Vec<Calendar>> {
        let calendars = self.fetch_all_pages("calendars", &[]).await?;
        debug!("fetched {} calendars", calendars.len());
        Ok(calendars)
    }

    /// Lists events from one calendar, raw and in provider order.
    pub async fn list_events(&self, calendar_id: &str) -> ProviderResult<Vec<ProviderEvent>> {
        let events = self
            .fetch_all_pages("events", &[("calendar_id", calendar_id)])
            .await?;
        debug!("fetched {} events from calendar {}", events.len(), calendar_id);
        Ok(events)
    }

    /// Creates an event and returns it as the provider stored it.
    pub async fn create_event(
        &self,
        calendar_id: &str,
        draft: &EventDraft,
    ) -> ProviderResult<ProviderEvent> {
        let url = self.resource_url("events");
        let request = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .query(&[("calendar_id", calendar_id)])
            .json(draft);

        let body = self.execute(request).await?;
        let response: SingleResponse<ProviderEvent> = serde_json::from_str(&body)
            .map_err(|e| ProviderError::invalid_response(format!("failed to parse response: {}", e)))?;

        debug!("created event {} on calendar {}", response.data.id, calendar_id);
        Ok(response.data)
    }

    /// Fetches every page of a list endpoint, following `next_cursor`.
    async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> ProviderResult<Vec<T>> {
        let url = self.resource_url(resource);
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http_client
                .get(&url)
                .bearer_auth(&self.config.api_key)
                .query(&[("limit", PAGE_LIMIT.to_string())])
                .query(query);

            if let Some(token) = page_token.as_deref() {
                request = request.query(&[("page_token", token)]);
            }

            let body = self.execute(request).await?;
            let page: ListResponse<T> = serde_json::from_str(&body).map_err(|e| {
                ProviderError::invalid_response(format!("failed to parse response: {}", e))
            })?;

            items.extend(page.data);

            match continuation(page.next_cursor) {
                Some(cursor) => page_token = Some(cursor),
                None => break,
            }
        }

        Ok(items)
    }

    /// Sends a request and returns the body of a successful response.
    async fn execute(&self, request: reqwest::RequestBuilder) -> ProviderResult<String> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::network("request timeout")
            } else if e.is_connect() {
                ProviderError::network(format!("connection failed: {}", e))
            } else {
                ProviderError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProviderError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::authentication("API key rejected"));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::authorization("access denied to grant"));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::not_found(api_error_detail(&body)));
        }

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::bad_request(format!(
                "API error ({}): {}",
                status,
                api_error_detail(&body)
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::server(format!(
                "API error ({}): {}",
                status,
                api_error_detail(&body)
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))
    }

    fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/v3/grants/{}/{}",
            self.config.api_uri,
            urlencoding::encode(&self.config.grant_id),
            resource
        )
    }
}

/// Headers every request carries: the API answers in JSON.
fn base_headers() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}

/// An absent or empty `next_cursor` ends pagination.
fn continuation(cursor: Option<String>) -> Option<String> {
    cursor.filter(|c| !c.is_empty())
}

/// Extracts the error message from a Nylas error body, falling back to the
/// raw body when it does not have the expected shape.
fn api_error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.to_string(),
    }
}

/// Envelope of list endpoints.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    next_cursor: Option<String>,
    #[serde(rename = "request_id")]
    _request_id: Option<String>,
}

/// Envelope of single-object endpoints.
#[derive(Debug, Deserialize)]
struct SingleResponse<T> {
    data: T,
    #[serde(rename = "request_id")]
    _request_id: Option<String>,
}

/// Error envelope.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default, rename = "type")]
    _error_type: Option<String>,
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use crate::event::EventWhen;
    use std::time::Duration;

    #[test]
    fn rejects_invalid_config() {
        let err = NylasClient::new(NylasConfig::new("", "grant")).unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);
    }

    #[test]
    fn every_request_asks_for_json() {
        let headers = base_headers();
        assert_eq!(
            headers.get(reqwest::header::ACCEPT).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn builds_resource_urls() {
        let config = NylasConfig::new("key", "grant/with spaces")
            .with_api_uri("https://api.eu.nylas.com")
            .with_timeout(Duration::from_secs(5));
        let client = NylasClient::new(config).unwrap();

        assert_eq!(
            client.resource_url("calendars"),
            "https://api.eu.nylas.com/v3/grants/grant%2Fwith%20spaces/calendars"
        );
    }

    #[test]
    fn parse_calendar_list_response() {
        let json = r#"{
            "request_id": "req-1",
            "data": [
                { "id": "cal-1", "name": "Personal", "is_primary": true, "timezone": "America/Denver" },
                { "id": "cal-2", "name": "Holidays", "read_only": true }
            ],
            "next_cursor": "cursor-abc"
        }"#;

        let response: ListResponse<Calendar> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert!(response.data[0].is_primary);
        assert!(!response.data[0].read_only);
        assert!(response.data[1].read_only);
        assert_eq!(response.next_cursor.as_deref(), Some("cursor-abc"));
    }

    #[test]
    fn parse_event_list_response() {
        let json = r#"{
            "request_id": "req-2",
            "data": [
                {
                    "id": "evt-1",
                    "calendar_id": "cal-1",
                    "title": "Standup",
                    "busy": true,
                    "when": { "start_time": 1751880600, "end_time": 1751882400 }
                },
                {
                    "id": "evt-2",
                    "calendar_id": "cal-1",
                    "title": "Conference",
                    "when": { "start_date": "2025-07-07", "end_date": "2025-07-09" }
                }
            ]
        }"#;

        let response: ListResponse<ProviderEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].when.kind(), "timespan");
        assert_eq!(response.data[1].when.kind(), "datespan");
        assert!(response.next_cursor.is_none());
    }

    #[test]
    fn parse_empty_list_response() {
        let json = r#"{ "request_id": "req-3" }"#;
        let response: ListResponse<ProviderEvent> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn parse_created_event_response() {
        let json = r#"{
            "request_id": "req-4",
            "data": {
                "id": "evt-9",
                "calendar_id": "cal-1",
                "title": "Coffee Chat with Ada",
                "busy": true,
                "status": "confirmed",
                "when": {
                    "start_time": 1751880600,
                    "end_time": 1751882400,
                    "start_timezone": "America/New_York",
                    "end_timezone": "America/New_York"
                },
                "participants": [ { "email": "ada@example.com", "status": "noreply" } ]
            }
        }"#;

        let response: SingleResponse<ProviderEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.id, "evt-9");
        assert_eq!(response.data.title.as_deref(), Some("Coffee Chat with Ada"));
        match &response.data.when {
            EventWhen::Timespan { start_timezone, .. } => {
                assert_eq!(start_timezone.as_deref(), Some("America/New_York"));
            }
            other => panic!("expected timespan, got {:?}", other),
        }
    }

    #[test]
    fn pagination_stops_on_absent_or_empty_cursor() {
        assert_eq!(continuation(None), None);
        assert_eq!(continuation(Some(String::new())), None);
        assert_eq!(
            continuation(Some("cursor-abc".to_string())),
            Some("cursor-abc".to_string())
        );
    }

    #[test]
    fn error_detail_prefers_the_message_field() {
        let body = r#"{
            "request_id": "req-5",
            "error": { "type": "invalid_request_error", "message": "calendar not found" }
        }"#;
        assert_eq!(api_error_detail(body), "calendar not found");

        assert_eq!(api_error_detail("plain text"), "plain text");
    }
}
