// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{header, Request, StatusCode, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::warn;

use crate::MapError;

/// GET the upstream mapping document.
///
/// Socket-level failures and timeouts surface as [`MapError::Fetch`]. An
/// unexpected status is [`MapError::Validation`]: the endpoint answered, just
/// not with the document.
pub async fn fetch_upstream(url: &str, timeout: Duration) -> Result<String, MapError> {
    let uri: Uri = url
        .parse()
        .map_err(|_| MapError::Fetch(format!("invalid upstream url {url}")))?;

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build(https);

    let request = Request::get(uri)
        .header(
            header::USER_AGENT,
            concat!("ews-winzone/", env!("CARGO_PKG_VERSION")),
        )
        .body(Empty::new())
        .map_err(|e| MapError::Fetch(e.to_string()))?;

    let response = tokio::time::timeout(timeout, client.request(request))
        .await
        .map_err(|_| {
            warn!("request to {url} timed out after {timeout:?}");
            MapError::Fetch(format!("request to {url} timed out"))
        })?
        .map_err(|e| MapError::Fetch(e.to_string()))?;

    if response.status() != StatusCode::OK {
        return Err(MapError::Validation(format!(
            "unexpected response status {} from {url}",
            response.status()
        )));
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| MapError::Fetch(e.to_string()))?
        .to_bytes();
    String::from_utf8(body.to_vec())
        .map_err(|_| MapError::Validation("document is not valid UTF-8".to_string()))
}
