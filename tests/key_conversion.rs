//! End-to-end tests of the public key conversion API.

use solana_keypair::Keypair;
use solana_signer::Signer;
use solmint::prelude::*;

#[test]
fn converts_between_every_supported_encoding() {
    let keypair = Keypair::new();
    let bytes = keypair.to_bytes();

    let from_bytes = convert(KeyInput::Bytes(&bytes)).unwrap();
    assert_eq!(from_bytes.format, KeyFormat::Array);
    assert_eq!(from_bytes.pubkey, keypair.pubkey().to_string());

    // Every re-emitted encoding must come back to the same key.
    let encodings = &from_bytes.encodings;
    for text in [
        encodings.json_array.as_str(),
        encodings.base58.as_str(),
        encodings.base64.as_str(),
        encodings.hex.as_str(),
        encodings.comma.as_str(),
    ] {
        let back = convert(KeyInput::Text(text)).unwrap();
        assert_eq!(back.pubkey, from_bytes.pubkey);
        assert_eq!(back.encodings.array, bytes.to_vec());
    }
}

#[test]
fn detected_key_signs_as_the_original_wallet() {
    let keypair = Keypair::new();
    let b58 = bs58::encode(keypair.to_bytes()).into_string();

    let decoded = detect(KeyInput::Text(&b58)).unwrap();
    let rebuilt = decoded.secret.to_keypair().unwrap();
    assert_eq!(rebuilt.pubkey(), keypair.pubkey());

    let message = b"solmint signing check";
    let signature = rebuilt.sign_message(message);
    assert!(signature.verify(keypair.pubkey().as_ref(), message));
}

#[test]
fn all_ones_array_is_stable_across_runs() {
    let first = convert(KeyInput::Bytes(&[1u8; 64])).unwrap();
    let second = convert(KeyInput::Bytes(&[1u8; 64])).unwrap();
    assert_eq!(first.pubkey, second.pubkey);
    assert_eq!(first.encodings, second.encodings);
}

#[test]
fn malformed_input_yields_no_partial_result() {
    let err = convert(KeyInput::Text("not-a-key")).unwrap_err();
    assert!(matches!(err, KeyError::UnrecognizedFormat));
}

#[test]
fn conversion_result_serializes_for_output_files() {
    let keypair = Keypair::new();
    let converted = convert(KeyInput::Bytes(&keypair.to_bytes())).unwrap();
    let json = serde_json::to_value(&converted).unwrap();
    assert!(json["encodings"]["base58"].is_string());
    assert_eq!(json["encodings"]["array"].as_array().unwrap().len(), 64);
}
