//! File upload service
//!
//! There is no external object storage: an upload is encoded into a
//! self-contained `data:` URI that can be embedded directly as an image
//! source.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::info;
use wander_types::Envelope;

use crate::latency::Latency;

pub struct MediaService {
    latency: Latency,
}

impl MediaService {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    /// Read a file and return it as an inline data URI. A read failure is
    /// a failure envelope, not a fault.
    pub async fn upload_file(&self, path: &Path) -> Envelope<String> {
        self.latency.simulate().await;

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => return Envelope::fail(format!("could not read file: {}", e)),
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Encoded upload {} ({} bytes)", name, bytes.len());
        Envelope::ok(encode_data_uri(&name, &bytes))
    }
}

/// Encode raw file bytes as `data:<mime>;base64,<payload>`. The media type
/// is guessed from the file extension.
pub fn encode_data_uri(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(file_name), STANDARD.encode(bytes))
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
