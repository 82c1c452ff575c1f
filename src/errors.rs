use thiserror::Error;

/// All errors that can occur in SecretSlide.
#[derive(Debug, Error)]
pub enum SecretSlideError {
    // --- Key errors ---
    #[error("No key supplied — derive one from a password or save one with `secretslide key save`")]
    MissingKey,

    #[error("Key must be exactly 32 bytes (got {0})")]
    InvalidKeyLength(usize),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Cipher errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Deliberately carries no detail: wrong key and tampering look the same.
    #[error("Decryption failed — wrong password or corrupted file")]
    AuthenticationFailed,

    // --- Envelope errors ---
    #[error("Invalid secret file: {0}")]
    InvalidEnvelope(String),

    // --- Key store errors ---
    #[error("Key store error: {0}")]
    KeyStore(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for SecretSlide results.
pub type Result<T> = std::result::Result<T, SecretSlideError>;
