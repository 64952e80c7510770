// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Remote song catalog client.
//!
//! This module fetches the song catalog from the content API with a single
//! blocking HTTP GET and validates the payload into [`Song`]s at the
//! boundary. It is only ever called from the task worker thread, never from
//! the UI thread.
//!
//! The expected payload is `{"data": [ { "id": 1, "name": ..., ... } ]}`.
//! A missing or `null` `data` field is an empty catalog; unknown fields are
//! ignored.

pub(crate) mod retry;

use std::collections::HashSet;

use reqwest::{StatusCode, blocking::Client};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    http::retry::RetryPolicy,
    model::{Song, SongId},
};

/// The one failure kind of a catalog fetch.
#[derive(Debug, Error)]
pub(crate) enum NetworkError {
    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed: server responded with {0}")]
    Status(StatusCode),

    #[error("API request failed: invalid catalog payload: {0}")]
    Decode(#[source] serde_json::Error),
}

impl NetworkError {
    /// Connectivity problems, timeouts and server-side errors may go away on
    /// their own, anything else will not.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Transport(_) => true,
            NetworkError::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            NetworkError::Decode(_) => false,
        }
    }
}

#[derive(Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

pub(crate) struct CatalogClient {
    client: Client,
    catalog_url: String,
    retry: RetryPolicy,
}

impl CatalogClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(NetworkError::Transport)?;

        Ok(Self {
            client,
            catalog_url: config.catalog_url.clone(),
            retry: RetryPolicy::new(config.fetch_attempts, config.retry_backoff()),
        })
    }

    /// Fetches and validates the whole catalog, retrying transient failures.
    pub(crate) fn fetch_catalog(&self) -> Result<Vec<Song>, NetworkError> {
        info!(url = %self.catalog_url, attempts = self.retry.attempts(), "Fetching song catalog");

        let songs = self.retry.run(
            |attempt| {
                debug!(attempt, "Catalog request");
                self.fetch_once()
            },
            NetworkError::is_retryable,
        )?;

        info!(count = songs.len(), "Song catalog fetched");
        Ok(songs)
    }

    fn fetch_once(&self) -> Result<Vec<Song>, NetworkError> {
        let response = self
            .client
            .get(&self.catalog_url)
            .send()
            .map_err(NetworkError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status));
        }

        let body = response.bytes().map_err(NetworkError::Transport)?;
        decode_catalog(&body)
    }
}

/// Decodes a catalog response body into validated songs.
///
/// Only the envelope is strict: the body must be JSON and `data`, when
/// present, must be an array. Records are read field by field. A record
/// without a usable `id`, or repeating an earlier `id`, is dropped. Missing
/// or wrong-typed text fields become empty strings and a missing or
/// wrong-typed `top_track` flag is `false`.
pub(crate) fn decode_catalog(body: &[u8]) -> Result<Vec<Song>, NetworkError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(vec![]);
    }

    let envelope: Option<CatalogEnvelope> =
        serde_json::from_slice(body).map_err(NetworkError::Decode)?;

    let records = envelope.and_then(|e| e.data).unwrap_or_default();

    let mut seen = HashSet::new();
    let mut songs = Vec::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        let Some(song) = decode_record(position, record) else {
            continue;
        };

        if !seen.insert(song.id) {
            warn!(id = %song.id, "Dropping catalog record with a duplicate id");
            continue;
        }

        songs.push(song);
    }

    Ok(songs)
}

fn decode_record(position: usize, record: &Value) -> Option<Song> {
    let Some(fields) = record.as_object() else {
        warn!(position, "Dropping catalog record that is not an object");
        return None;
    };

    let Some(id) = fields.get("id").and_then(record_id) else {
        warn!(position, "Dropping catalog record without a usable id");
        return None;
    };

    Some(Song {
        id,
        name: text_field(fields, "name", id),
        artist: text_field(fields, "artist", id),
        cover: text_field(fields, "cover", id),
        url: text_field(fields, "url", id),
        accent: text_field(fields, "accent", id),
        top_track: flag_field(fields, "top_track", id),
    })
}

/// Integer ids, or strings holding one.
fn record_id(value: &Value) -> Option<SongId> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    id.map(SongId)
}

fn text_field(fields: &Map<String, Value>, key: &str, id: SongId) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => {
            warn!(%id, field = key, value = %other, "Ignoring malformed catalog field");
            String::new()
        }
    }
}

fn flag_field(fields: &Map<String, Value>, key: &str, id: SongId) -> bool {
    match fields.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            warn!(%id, field = key, value = %other, "Ignoring malformed catalog field");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    const BODY: &str = r##"{
        "data": [
            {"id": 1, "status": "published", "name": "Alpha", "artist": "A", "accent": "#331E00",
             "cover": "4f718272-6b0e-42ee-92d0-805b783cb471", "top_track": true,
             "url": "https://pub-172b4845a7e24a16956308706aaf24c2.r2.dev/august-145937.mp3"},
            {"id": 2, "name": "Beta", "artist": "B", "top_track": false}
        ]
    }"##;

    #[test]
    fn decodes_records_and_ignores_unknown_fields() {
        let songs = decode_catalog(BODY.as_bytes()).unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, SongId(1));
        assert_eq!(songs[0].name, "Alpha");
        assert_eq!(songs[0].accent, "#331E00");
        assert!(songs[0].top_track);
        assert_eq!(songs[1].cover, "");
        assert!(!songs[1].top_track);
    }

    #[test]
    fn missing_or_null_data_is_an_empty_catalog() {
        assert!(decode_catalog(br#"{"data": null}"#).unwrap().is_empty());
        assert!(decode_catalog(br#"{}"#).unwrap().is_empty());
        assert!(decode_catalog(b"null").unwrap().is_empty());
        assert!(decode_catalog(b"  ").unwrap().is_empty());
    }

    #[test]
    fn records_without_id_or_with_duplicate_id_are_dropped() {
        let body = br#"{"data": [
            {"name": "No id"},
            {"id": 5, "name": "First"},
            {"id": 5, "name": "Second"},
            {"id": 6, "name": "Other", "top_track": null}
        ]}"#;

        let songs = decode_catalog(body).unwrap();
        let names: Vec<_> = songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["First", "Other"]);
    }

    #[test]
    fn wrong_typed_fields_are_defaulted_not_fatal() {
        let body = br##"{"data": [
            {"id": 1, "name": "Alpha", "artist": "A", "accent": "#331E00", "top_track": true},
            {"id": 2, "name": 123, "artist": ["B"], "cover": {}, "top_track": "yes"},
            {"id": "7", "name": "Seven", "top_track": 1}
        ]}"##;

        let songs = decode_catalog(body).unwrap();

        assert_eq!(songs.len(), 3);
        assert_eq!(songs[0].name, "Alpha");
        assert!(songs[0].top_track);

        assert_eq!(songs[1].id, SongId(2));
        assert_eq!(songs[1].name, "");
        assert_eq!(songs[1].artist, "");
        assert_eq!(songs[1].cover, "");
        assert!(!songs[1].top_track);

        assert_eq!(songs[2].id, SongId(7));
        assert_eq!(songs[2].name, "Seven");
        assert!(!songs[2].top_track);
    }

    #[test]
    fn records_with_unusable_ids_are_dropped() {
        let body = br#"{"data": [
            {"id": true, "name": "Flag"},
            {"id": 1.5, "name": "Fraction"},
            {"id": "seven", "name": "Word"},
            "not a record",
            {"id": 3, "name": "Kept"}
        ]}"#;

        let songs = decode_catalog(body).unwrap();
        let names: Vec<_> = songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Kept"]);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = decode_catalog(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
        assert!(!err.is_retryable());
        assert!(err.to_string().starts_with("API request failed"));

        let err = decode_catalog(br#"{"data": {"id": 1}}"#).unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(NetworkError::Status(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
        assert!(NetworkError::Status(StatusCode::TOO_MANY_REQUESTS).is_retryable());
        assert!(!NetworkError::Status(StatusCode::NOT_FOUND).is_retryable());
    }

    /// Serves one canned response per entry, in order, then stops.
    fn serve(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }

                let response = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        format!("http://{}/items/songs", addr)
    }

    fn config(catalog_url: String, attempts: u32) -> AppConfig {
        AppConfig {
            catalog_url,
            request_timeout_secs: 5,
            fetch_attempts: attempts,
            retry_backoff_ms: 1,
            ..AppConfig::default()
        }
    }

    #[test]
    fn fetches_catalog_over_http() {
        let url = serve(vec![(200, BODY)]);
        let client = CatalogClient::new(&config(url, 1)).unwrap();

        let songs = client.fetch_catalog().unwrap();
        assert_eq!(songs.len(), 2);
    }

    #[test]
    fn retries_a_server_error() {
        let url = serve(vec![(503, ""), (200, BODY)]);
        let client = CatalogClient::new(&config(url, 2)).unwrap();

        let songs = client.fetch_catalog().unwrap();
        assert_eq!(songs[1].name, "Beta");
    }

    #[test]
    fn not_found_fails_without_retry() {
        let url = serve(vec![(404, "")]);
        let client = CatalogClient::new(&config(url, 3)).unwrap();

        let err = client.fetch_catalog().unwrap_err();
        assert!(matches!(err, NetworkError::Status(StatusCode::NOT_FOUND)));
    }

    #[test]
    fn connection_refused_is_a_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let client = CatalogClient::new(&config(format!("http://{}/items/songs", addr), 1)).unwrap();

        let err = client.fetch_catalog().unwrap_err();
        assert!(matches!(err, NetworkError::Transport(_)));
    }
}
