//! Ed25519 request verification
//!
//! Discord signs every interaction request with the application's key pair.
//! The signed message is the `x-signature-timestamp` header value followed by
//! the raw request body, and the hex encoded signature is sent in
//! `x-signature-ed25519`.

use crate::bridge::interaction::Interaction;
use anyhow::{Context as _, anyhow};
use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, VerifyingKey};
use thiserror::Error;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("missing {0} header")]
    MissingHeader(&'static str),
    #[error("request signature is not valid")]
    BadSignature,
    #[error("signed body is not a valid interaction")]
    MalformedPayload(#[source] serde_json::Error),
}

impl VerifyError {
    /// Whether the request failed authentication (as opposed to decoding)
    pub fn is_authentication_failure(&self) -> bool {
        !matches!(self, VerifyError::MalformedPayload(_))
    }
}

/// Decode the application public key from its hex form
pub fn parse_public_key(hex_key: &str) -> anyhow::Result<VerifyingKey> {
    let bytes: [u8; PUBLIC_KEY_LENGTH] = hex::decode(hex_key.trim())
        .context("Decoding public key as hex")?
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            anyhow!(
                "Public key must be {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                bytes.len()
            )
        })?;

    VerifyingKey::from_bytes(&bytes).context("Public key is not a valid Ed25519 point")
}

/// Check the detached signature of a request
///
/// Both headers must be present; nothing is decoded before the signature
/// has been checked.
pub fn verify_signature(
    body: &[u8],
    signature: Option<&str>,
    timestamp: Option<&str>,
    public_key: &VerifyingKey,
) -> Result<(), VerifyError> {
    let signature = signature.ok_or(VerifyError::MissingHeader(SIGNATURE_HEADER))?;
    let timestamp = timestamp.ok_or(VerifyError::MissingHeader(TIMESTAMP_HEADER))?;

    let signature_bytes: [u8; SIGNATURE_LENGTH] = hex::decode(signature)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(VerifyError::BadSignature)?;
    let signature = Signature::from_bytes(&signature_bytes);

    let mut signed = Vec::with_capacity(timestamp.len() + body.len());
    signed.extend_from_slice(timestamp.as_bytes());
    signed.extend_from_slice(body);

    public_key
        .verify_strict(&signed, &signature)
        .map_err(|_| VerifyError::BadSignature)
}

/// Verify a request and decode its body as an interaction
pub fn verify_request(
    body: &[u8],
    signature: Option<&str>,
    timestamp: Option<&str>,
    public_key: &VerifyingKey,
) -> Result<Interaction, VerifyError> {
    verify_signature(body, signature, timestamp, public_key)?;
    serde_json::from_slice(body).map_err(VerifyError::MalformedPayload)
}
