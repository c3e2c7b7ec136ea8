//! Content storage uploader.
//!
//! Persists arbitrary bytes (images) and JSON documents to an upload node and
//! returns a gateway URI for each. The node's wire protocol is not owned
//! here; this layer only knows "POST the content, read back a receipt id".

#[cfg(feature = "client")]
pub mod client;
pub mod retry;

#[cfg(feature = "client")]
pub use client::StorageClient;
pub use retry::UploadRetry;

use serde::{Deserialize, Serialize};

/// Receipt returned by the upload node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadReceipt {
    /// Content identifier; appended to the gateway URL to retrieve the data.
    pub id: String,
}

/// Build the retrievable URI for an uploaded content id.
pub fn gateway_uri(gateway_url: &str, id: &str) -> String {
    format!("{}/{}", gateway_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_uri_joins_cleanly() {
        assert_eq!(
            gateway_uri("https://gateway.irys.xyz", "abc123"),
            "https://gateway.irys.xyz/abc123"
        );
        assert_eq!(
            gateway_uri("https://gateway.irys.xyz/", "abc123"),
            "https://gateway.irys.xyz/abc123"
        );
    }

    #[test]
    fn test_receipt_parses() {
        let receipt: UploadReceipt = serde_json::from_str(r#"{"id":"tx9","extra":1}"#).unwrap();
        assert_eq!(receipt.id, "tx9");
    }
}
