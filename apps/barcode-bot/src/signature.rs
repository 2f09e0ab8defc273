//! Interaction signature verification.
//!
//! Discord signs `timestamp || body` with the application's Ed25519 key and
//! drops endpoints that accept forged requests, so every POST is checked
//! before its body is parsed.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::error::BotError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Builds a verifier from the hex public key shown in the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self, BotError> {
        let bytes = hex::decode(public_key)
            .map_err(|e| BotError::InvalidSignature(format!("public key is not hex: {e}")))?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| BotError::InvalidSignature("public key must be 32 bytes".to_string()))?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| BotError::InvalidSignature(format!("public key rejected: {e}")))?;

        Ok(SignatureVerifier { key })
    }

    pub fn verify(
        &self,
        timestamp: &str,
        body: &[u8],
        signature_hex: &str,
    ) -> Result<(), BotError> {
        let signature_bytes = hex::decode(signature_hex)
            .map_err(|_| BotError::InvalidSignature("signature is not hex".to_string()))?;
        let signature = Signature::from_slice(&signature_bytes)
            .map_err(|_| BotError::InvalidSignature("signature must be 64 bytes".to_string()))?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| BotError::InvalidSignature("signature mismatch".to_string()))
    }
}
