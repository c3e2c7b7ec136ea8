//! Private key format converter.
//!
//! Usage: `convert-key <KEY> [OUTPUT_PATH]`
//!
//! `<KEY>` is the private key in any supported encoding (JSON array, Base58,
//! Base64, hex, comma-separated decimals), or `-` to read it from stdin.
//! When `OUTPUT_PATH` is given, the numeric-array form is written there as a
//! keypair file.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use solmint::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(key_arg) = args.next() else {
        bail!("usage: convert-key <KEY | -> [OUTPUT_PATH]");
    };
    let output_path = args.next().map(PathBuf::from);

    let key_input = if key_arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading key from stdin")?;
        buf
    } else {
        key_arg
    };

    let converted = convert(KeyInput::Text(key_input.trim()))
        .context("could not convert private key")?;

    println!("Detected format: {}", converted.format);
    println!("Public key:      {}", converted.pubkey);
    println!();
    println!("Private key formats:");
    println!("  array:       {}", preview(&converted.encodings.json_array));
    println!("  base58:      {}", converted.encodings.base58);
    println!("  base64:      {}", converted.encodings.base64);
    println!("  hex:         {}", converted.encodings.hex);
    println!("  comma:       {}", preview(&converted.encodings.comma));

    if let Some(path) = output_path {
        let secret = converted.secret()?;
        save_secret_bytes(&path, &secret)?;
        println!();
        println!("Keypair saved to: {}", path.display());
    }

    Ok(())
}

/// Long encodings are truncated for terminal output; the full value is in
/// the saved file.
fn preview(s: &str) -> String {
    const MAX: usize = 48;
    if s.len() <= MAX {
        s.to_string()
    } else {
        format!("{}...", &s[..MAX])
    }
}
