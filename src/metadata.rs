//! Off-chain NFT metadata document (Metaplex JSON standard shape).
//!
//! No schema is enforced beyond what the storage/metadata tooling expects;
//! these types just make the well-known fields explicit.

use serde::{Deserialize, Serialize};

/// One descriptive attribute, e.g. `{"trait_type": "Background", "value": "Blue"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// One file entry under `properties.files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileSpec {
    pub uri: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// The `properties` block: referenced files plus asset category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Properties {
    pub files: Vec<FileSpec>,
    pub category: String,
}

/// The full metadata document uploaded alongside the image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NftMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Gateway URI of the uploaded image.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Royalty in basis points, carried in the off-chain document.
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub properties: Properties,
}

impl NftMetadata {
    /// Build a document referencing an already-uploaded image.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
        image_uri: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        let image = image_uri.into();
        let content_type = content_type.into();
        Self {
            name: name.into(),
            symbol: symbol.into(),
            description: description.into(),
            properties: Properties {
                files: vec![FileSpec {
                    uri: image.clone(),
                    content_type,
                }],
                category: "image".to_string(),
            },
            image,
            external_url: None,
            seller_fee_basis_points: 0,
            attributes: Vec::new(),
        }
    }

    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    pub fn with_seller_fee_basis_points(mut self, bps: u16) -> Self {
        self.seller_fee_basis_points = bps;
        self
    }

    pub fn with_attribute(
        mut self,
        trait_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push(Attribute {
            trait_type: trait_type.into(),
            value: value.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let meta = NftMetadata::new("Name", "SYM", "A token", "https://g/img", "image/png")
            .with_external_url("https://example.com")
            .with_seller_fee_basis_points(5000)
            .with_attribute("Background", "Blue");

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "Name");
        assert_eq!(json["external_url"], "https://example.com");
        assert_eq!(json["seller_fee_basis_points"], 5000);
        assert_eq!(json["attributes"][0]["trait_type"], "Background");
        // `type` on the wire, `content_type` in Rust.
        assert_eq!(json["properties"]["files"][0]["type"], "image/png");
        assert_eq!(json["properties"]["category"], "image");
    }

    #[test]
    fn test_external_url_omitted_when_unset() {
        let meta = NftMetadata::new("N", "S", "D", "https://g/img", "image/png");
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("external_url").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let meta = NftMetadata::new("N", "S", "D", "https://g/img", "image/png")
            .with_attribute("Rarity", "Legendary");
        let json = serde_json::to_string(&meta).unwrap();
        let back: NftMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
