//! Remote calendar client.
//!
//! Thin wrapper over a Google-Calendar-shaped REST API: create an event
//! and list events in a time range. Failures surface as [`ApiError`]
//! and never touch local state -- callers log, drop the remote overlay,
//! and carry on.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::error::{ApiError, Result};

const SERVICE: &str = "calendar";
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// An event fetched from the remote calendar. All-day events arrive as
/// bare dates; timed events as full timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEvent {
    pub id: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

pub struct CalendarClient {
    http: Client,
    base_url: String,
    token: String,
}

impl CalendarClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), token)
    }

    /// Point the client at a different host (tests use a mock server).
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token,
        }
    }

    /// Create a remote event and return its id.
    pub async fn create_event(
        &self,
        title: &str,
        description: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        timezone: &str,
    ) -> Result<String> {
        let url = format!("{}/calendars/primary/events", self.base_url);
        let body = json!({
            "summary": title,
            "description": description,
            "start": { "dateTime": start.to_rfc3339(), "timeZone": timezone },
            "end": { "dateTime": end.to_rfc3339(), "timeZone": timezone },
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;

        let status = resp.status();
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &payload).into());
        }

        payload["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| malformed("missing event id in response").into())
    }

    /// List events overlapping `[from, to)`, ordered by start time.
    pub async fn list_events(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RemoteEvent>> {
        let mut url = Url::parse(&format!("{}/calendars/primary/events", self.base_url))
            .map_err(|e| malformed(&format!("bad base url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("timeMin", &from.to_rfc3339())
            .append_pair("timeMax", &to.to_rfc3339())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;

        let status = resp.status();
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &payload).into());
        }

        let items = payload["items"]
            .as_array()
            .ok_or_else(|| malformed("missing items in response"))?;

        let mut events = Vec::with_capacity(items.len());
        for item in items {
            events.push(parse_event(item)?);
        }
        Ok(events)
    }
}

fn parse_event(item: &serde_json::Value) -> Result<RemoteEvent> {
    let id = item["id"]
        .as_str()
        .ok_or_else(|| malformed("event missing id"))?
        .to_string();
    let summary = item["summary"].as_str().unwrap_or("(No title)").to_string();

    let (start, all_day) = parse_boundary(&item["start"])?;
    let (end, _) = parse_boundary(&item["end"])?;

    Ok(RemoteEvent {
        id,
        summary,
        start,
        end,
        all_day,
    })
}

/// A boundary is either `{"dateTime": rfc3339}` or, for all-day events,
/// `{"date": "YYYY-MM-DD"}` which maps to midnight UTC.
fn parse_boundary(boundary: &serde_json::Value) -> Result<(DateTime<Utc>, bool)> {
    if let Some(ts) = boundary["dateTime"].as_str() {
        let parsed = DateTime::parse_from_rfc3339(ts)
            .map_err(|e| malformed(&format!("bad dateTime '{ts}': {e}")))?;
        return Ok((parsed.with_timezone(&Utc), false));
    }
    if let Some(date) = boundary["date"].as_str() {
        let day: NaiveDate = date
            .parse()
            .map_err(|e| malformed(&format!("bad date '{date}': {e}")))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| malformed("date out of range"))?;
        return Ok((midnight.and_utc(), true));
    }
    Err(malformed("event boundary has neither dateTime nor date").into())
}

fn status_error(status: u16, payload: &serde_json::Value) -> ApiError {
    let message = payload["error"]["message"]
        .as_str()
        .unwrap_or("no error message")
        .to_string();
    ApiError::Status {
        service: SERVICE,
        status,
        message,
    }
}

fn malformed(message: &str) -> ApiError {
    ApiError::Malformed {
        service: SERVICE,
        message: message.to_string(),
    }
}
