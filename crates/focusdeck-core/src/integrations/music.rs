//! Remote music client.
//!
//! Spotify-shaped playback control: current playback, play/pause/skip,
//! playlist listing. Everything is best-effort -- a missing linked
//! account just disables the affordance upstream. On a 401 the client
//! refreshes its access token and retries exactly once before
//! surfacing the failure.

use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::error::{ApiError, Result};

const SERVICE: &str = "music";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Currently playing track, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct Playback {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// A playlist summary.
#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tracks_total: u32,
}

pub struct MusicClient {
    http: Client,
    api_url: String,
    token_url: String,
    access_token: String,
    refresh_token: Option<String>,
}

impl MusicClient {
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self::with_urls(
            DEFAULT_API_URL.to_string(),
            DEFAULT_TOKEN_URL.to_string(),
            access_token,
            refresh_token,
        )
    }

    /// Point the client at different hosts (tests use a mock server).
    pub fn with_urls(
        api_url: String,
        token_url: String,
        access_token: String,
        refresh_token: Option<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url,
            token_url,
            access_token,
            refresh_token,
        }
    }

    pub async fn current_playback(&mut self) -> Result<Option<Playback>> {
        let resp = self.request(Method::GET, "/me/player", None).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None); // nothing playing
        }
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;
        Ok(Some(Playback {
            is_playing: payload["is_playing"].as_bool().unwrap_or(false),
            track: payload["item"]["name"].as_str().map(str::to_string),
            artist: payload["item"]["artists"][0]["name"]
                .as_str()
                .map(str::to_string),
        }))
    }

    pub async fn play(&mut self) -> Result<()> {
        self.request(Method::PUT, "/me/player/play", Some(json!({})))
            .await?;
        Ok(())
    }

    pub async fn pause(&mut self) -> Result<()> {
        self.request(Method::PUT, "/me/player/pause", Some(json!({})))
            .await?;
        Ok(())
    }

    pub async fn skip_next(&mut self) -> Result<()> {
        self.request(Method::POST, "/me/player/next", Some(json!({})))
            .await?;
        Ok(())
    }

    pub async fn playlists(&mut self) -> Result<Vec<Playlist>> {
        let resp = self.request(Method::GET, "/me/playlists", None).await?;
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;
        let items = payload["items"]
            .as_array()
            .ok_or_else(|| ApiError::Malformed {
                service: SERVICE,
                message: "missing items in playlists response".to_string(),
            })?;
        let playlists = items
            .iter()
            .filter_map(|item| {
                Some(Playlist {
                    id: item["id"].as_str()?.to_string(),
                    name: item["name"].as_str()?.to_string(),
                    tracks_total: item["tracks"]["total"].as_u64().unwrap_or(0) as u32,
                })
            })
            .collect();
        Ok(playlists)
    }

    /// Send a request, refreshing the token and retrying exactly once
    /// on 401.
    async fn request(
        &mut self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let resp = self.send_once(method.clone(), path, body.clone()).await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return check_status(resp).await;
        }

        self.refresh_access_token().await?;
        let retried = self.send_once(method, path, body).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthExpired.into());
        }
        check_status(retried).await
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.api_url, path);
        let mut req = self
            .http
            .request(method, &url)
            .bearer_auth(&self.access_token);
        if let Some(body) = body {
            req = req.json(&body);
        }
        req.send()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source }.into())
    }

    async fn refresh_access_token(&mut self) -> Result<()> {
        let refresh = self
            .refresh_token
            .as_deref()
            .ok_or(ApiError::AuthExpired)?;
        let resp = self
            .http
            .post(&self.token_url)
            .form(&[("grant_type", "refresh_token"), ("refresh_token", refresh)])
            .send()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;
        if !resp.status().is_success() {
            return Err(ApiError::AuthExpired.into());
        }
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| ApiError::Request { service: SERVICE, source })?;
        self.access_token = payload["access_token"]
            .as_str()
            .ok_or(ApiError::AuthExpired)?
            .to_string();
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        service: SERVICE,
        status: status.as_u16(),
        message,
    }
    .into())
}
