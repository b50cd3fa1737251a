// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bounded request body reading

use axum::body::Body;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use thiserror::Error;

/// Largest accepted request body, in bytes
pub const MAX_BODY_BYTES: usize = 1_000_000;

#[derive(Error, Debug)]
pub enum BodyReadError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    Stream(#[from] axum::Error),
}

/// Read a body chunk by chunk, stopping as soon as `limit` is exceeded.
///
/// The remainder of an oversized body is never polled.
pub async fn read_body_limited(body: Body, limit: usize) -> Result<Bytes, BodyReadError> {
    let mut stream = body.into_data_stream();
    let mut buf = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > limit {
            return Err(BodyReadError::TooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf.freeze())
}
