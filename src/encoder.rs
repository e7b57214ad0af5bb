//! Turns the caller's photo into the base64 text carried in model requests.
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Result;

/// Reads `resource` to the end and returns its base64 payload.
///
/// A read failure surfaces as [`SceneError::Encoding`](crate::SceneError::Encoding)
/// holding the reader's own `io::Error`.
pub async fn encode<R>(mut resource: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    resource.read_to_end(&mut buf).await?;
    log::debug!("Read {} bytes from image resource", buf.len());
    Ok(encode_bytes(&buf))
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub async fn encode_file(path: impl AsRef<Path>) -> Result<String> {
    let file = tokio::fs::File::open(path.as_ref()).await?;
    encode(file).await
}

/// Returns the payload after the first comma of a `data:` URI, or the input
/// unchanged when it carries no such header.
pub fn strip_data_uri_prefix(encoded: &str) -> &str {
    if !encoded.starts_with("data:") {
        return encoded;
    }
    match encoded.split_once(',') {
        Some((_, payload)) => payload,
        None => encoded,
    }
}
