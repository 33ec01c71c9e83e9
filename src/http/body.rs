//! Response body constructors
//!
//! Every response carries a `ResponseBody`: in-memory pages and empty bodies
//! are boxed the same way as streamed files.

use futures_util::TryStreamExt;
use http_body_util::{combinators::BoxBody, BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use std::io;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Read size used when streaming a file to the client
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

pub type ResponseBody = BoxBody<Bytes, io::Error>;

pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

pub fn full<T: Into<Bytes>>(chunk: T) -> ResponseBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Stream an open file chunk by chunk; the file is never buffered whole
pub fn file(file: File) -> ResponseBody {
    let frames = ReaderStream::with_capacity(file, STREAM_CHUNK_SIZE).map_ok(Frame::data);
    StreamBody::new(frames).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_body_streams_in_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let contents: Vec<u8> = (0..=250u8).cycle().take(STREAM_CHUNK_SIZE * 3 + 17).collect();
        std::fs::write(&path, &contents).unwrap();

        let mut body = file(File::open(&path).await.unwrap());
        let mut frames = 0;
        let mut received = Vec::new();
        while let Some(frame) = body.frame().await {
            let data = frame.unwrap().into_data().unwrap();
            assert!(data.len() <= STREAM_CHUNK_SIZE);
            received.extend_from_slice(&data);
            frames += 1;
        }

        assert!(frames >= 4);
        assert_eq!(received, contents);
    }

    #[tokio::test]
    async fn test_full_and_empty() {
        let bytes = full("hello").collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"hello");
        assert!(empty().collect().await.unwrap().to_bytes().is_empty());
    }
}
