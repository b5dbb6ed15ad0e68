//! Per-chunk progress decoder.
//!
//! Assumes each transport chunk carries exactly one complete JSON document;
//! chunks that fail to parse are dropped instead of erroring, which keeps
//! the event sequence flowing at the cost of losing any event split across
//! a chunk boundary. Consumer-paced throughout: nothing is read ahead of
//! demand, and dropping the output stream tears down the request.

use futures::future;
use futures::Stream;
use futures_util::StreamExt;
use std::pin::Pin;
use tracing::debug;

use crate::traits::ByteStream;

use super::DeployProgress;

/// Lazy sequence of typed deployment progress events.
pub type ProgressStream = Pin<Box<dyn Stream<Item = DeployProgress> + Send>>;

/// Decode a single transport chunk into a progress event.
///
/// Returns `None` for anything that is not one complete JSON progress
/// object; the caller treats that as a dropped frame.
pub fn decode_chunk(chunk: &[u8]) -> Option<DeployProgress> {
    match serde_json::from_slice(chunk) {
        Ok(event) => Some(event),
        Err(err) => {
            debug!(%err, len = chunk.len(), "dropping undecodable progress chunk");
            None
        }
    }
}

/// Republish a raw byte-chunk stream as typed progress events.
///
/// Events come out in arrival order. The output ends when the upstream
/// ends; a transport error item also ends it, with no distinguishing
/// terminal signal.
pub fn decode_progress(chunks: ByteStream) -> ProgressStream {
    Box::pin(
        chunks
            .take_while(|item| future::ready(item.is_ok()))
            .filter_map(|item| {
                future::ready(match item {
                    Ok(bytes) => decode_chunk(&bytes),
                    Err(_) => None,
                })
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use futures::stream;

    use crate::traits::HttpError;

    fn chunk_stream(items: Vec<Result<Bytes, HttpError>>) -> ByteStream {
        Box::pin(stream::iter(items))
    }

    #[test]
    fn test_decode_chunk_valid() {
        let event = decode_chunk(br#"{"type":"uploadComplete"}"#).unwrap();
        assert_eq!(event, DeployProgress::UploadComplete);
    }

    #[test]
    fn test_decode_chunk_malformed() {
        assert!(decode_chunk(b"not-json").is_none());
        assert!(decode_chunk(b"").is_none());
        // Valid JSON, wrong shape
        assert!(decode_chunk(br#"{"type":"unknown"}"#).is_none());
        // Split frame: half a document
        assert!(decode_chunk(br#"{"type":"load","url":"#).is_none());
        // Invalid UTF-8
        assert!(decode_chunk(&[0xff, 0xfe, 0x7b]).is_none());
    }

    #[tokio::test]
    async fn test_malformed_chunks_are_dropped_silently() {
        let chunks = chunk_stream(vec![
            Ok(Bytes::from(
                r#"{"type":"load","url":"u","seen":1,"total":10}"#,
            )),
            Ok(Bytes::from("not-json")),
            Ok(Bytes::from(
                r#"{"type":"success","id":"d1","url":"https://example.com/mod.ts","projectId":"p1","createdAt":"2023-01-01T00:00:00Z","updatedAt":"2023-01-01T00:00:00Z"}"#,
            )),
        ]);

        let events: Vec<_> = decode_progress(chunks).collect().await;
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            DeployProgress::Load {
                url: "u".to_string(),
                seen: 1,
                total: 10,
            }
        );
        match &events[1] {
            DeployProgress::Success(deployment) => {
                assert_eq!(deployment.id, "d1");
                assert_eq!(
                    deployment.created_at,
                    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
                );
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_ends_the_sequence() {
        let chunks = chunk_stream(vec![
            Ok(Bytes::from(
                r#"{"type":"load","url":"u","seen":1,"total":10}"#,
            )),
            Err(HttpError::Io("connection reset".to_string())),
            Ok(Bytes::from(r#"{"type":"uploadComplete"}"#)),
        ]);

        let events: Vec<_> = decode_progress(chunks).collect().await;
        // The event after the error is never seen
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DeployProgress::Load { .. }));
    }

    #[tokio::test]
    async fn test_empty_upstream_yields_empty_output() {
        let events: Vec<_> = decode_progress(chunk_stream(vec![])).collect().await;
        assert!(events.is_empty());
    }
}
