//! Integration tests for whole-file encryption and the envelope format.

use std::fs;
use std::path::{Path, PathBuf};

use secretslide::crypto::{derive_key_with_params, FIXED_SALT};
use secretslide::errors::SecretSlideError;
use secretslide::vault::{self, derive_metadata, Envelope};
use tempfile::TempDir;

const KEY: [u8; 32] = [0x6Eu8; 32];

/// Helper: write `bytes` to `name` inside a fresh temp dir.
fn plaintext_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write plaintext");
    (dir, path)
}

/// Helper: encrypt `input` next to itself and return the envelope path.
fn seal(input: &Path, key: &[u8]) -> PathBuf {
    let output = input.with_extension("secret");
    vault::encrypt(input, &output, key).expect("encrypt");
    output
}

fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_then_decrypt_restores_bytes_and_name() {
    let key = derive_key_with_params(b"slides", FIXED_SALT, 1_000).unwrap();
    let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let (dir, input) = plaintext_file("holiday.JPG", &content);
    let envelope = seal(&input, key.as_bytes());

    let out = dir.path().join("restored");
    fs::create_dir(&out).unwrap();

    let again = derive_key_with_params(b"slides", FIXED_SALT, 1_000).unwrap();
    let restored = vault::decrypt(&envelope, &out, again.as_bytes()).expect("decrypt");

    assert_eq!(restored.output_path, out.join("holiday.JPG"));
    assert_eq!(restored.metadata.original_name, "holiday.JPG");
    assert_eq!(restored.metadata.mime, "image/jpeg");
    assert_eq!(fs::read(&restored.output_path).unwrap(), content);
}

#[test]
fn empty_file_roundtrip() {
    let (dir, input) = plaintext_file("empty.png", b"");
    let envelope = seal(&input, &KEY);

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let restored = vault::decrypt(&envelope, &out, &KEY).unwrap();
    assert!(fs::read(restored.output_path).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Envelope layout and IV uniqueness
// ---------------------------------------------------------------------------

#[test]
fn envelope_on_disk_has_expected_layout() {
    let (_dir, input) = plaintext_file("tiny.gif", b"GIF89a");
    let envelope = seal(&input, &KEY);
    let bytes = fs::read(&envelope).unwrap();

    let json = br#"{"originalName":"tiny.gif","mime":"image/gif"}"#;
    assert_eq!(&bytes[28..28 + json.len()], json);
    assert_eq!(bytes[28 + json.len()], b'\n');
    assert_eq!(bytes.len(), 28 + json.len() + 1 + 6);
}

#[test]
fn same_plaintext_twice_gives_different_envelopes() {
    let (dir, input) = plaintext_file("same.webp", b"identical content");
    let a = dir.path().join("a.secret");
    let b = dir.path().join("b.secret");
    vault::encrypt(&input, &a, &KEY).unwrap();
    vault::encrypt(&input, &b, &KEY).unwrap();

    let env_a = Envelope::from_bytes(&fs::read(&a).unwrap()).unwrap();
    let env_b = Envelope::from_bytes(&fs::read(&b).unwrap()).unwrap();

    assert_ne!(env_a.iv, env_b.iv);
    assert_ne!(env_a.ciphertext, env_b.ciphertext);
}

// ---------------------------------------------------------------------------
// Tamper detection and wrong keys
// ---------------------------------------------------------------------------

#[test]
fn any_bit_flip_in_tag_or_ciphertext_is_rejected() {
    let (dir, input) = plaintext_file("flip.png", b"8 bytes!");
    let envelope_path = seal(&input, &KEY);
    let original = fs::read(&envelope_path).unwrap();

    let delimiter = 28 + original[28..].iter().position(|&b| b == b'\n').unwrap();
    let tag_region = 12..28;
    let ciphertext_region = delimiter + 1..original.len();

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let tampered_path = dir.path().join("tampered.secret");

    for byte in tag_region.chain(ciphertext_region) {
        for bit in 0..8 {
            let mut tampered = original.clone();
            tampered[byte] ^= 1 << bit;
            fs::write(&tampered_path, &tampered).unwrap();

            let result = vault::decrypt(&tampered_path, &out, &KEY);
            assert!(
                matches!(result, Err(SecretSlideError::AuthenticationFailed)),
                "flip at byte {byte} bit {bit} was not rejected"
            );
            assert!(is_empty_dir(&out), "output written after flip at byte {byte}");
        }
    }
}

#[test]
fn wrong_password_is_rejected() {
    let right = derive_key_with_params(b"right", FIXED_SALT, 1_000).unwrap();
    let wrong = derive_key_with_params(b"wrong", FIXED_SALT, 1_000).unwrap();

    let (dir, input) = plaintext_file("private.jpeg", b"do not look");
    let envelope = seal(&input, right.as_bytes());

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let result = vault::decrypt(&envelope, &out, wrong.as_bytes());

    assert!(matches!(result, Err(SecretSlideError::AuthenticationFailed)));
    assert!(is_empty_dir(&out));
}

#[test]
fn failed_decrypt_keeps_existing_file() {
    let (dir, input) = plaintext_file("keep.png", b"new contents");
    let envelope = seal(&input, &KEY);

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("keep.png"), b"old contents").unwrap();

    let result = vault::decrypt(&envelope, &out, &[0x01u8; 32]);
    assert!(result.is_err());
    assert_eq!(fs::read(out.join("keep.png")).unwrap(), b"old contents");
}

// ---------------------------------------------------------------------------
// Malformed envelopes and key preconditions
// ---------------------------------------------------------------------------

#[test]
fn truncated_envelope_is_invalid() {
    let (dir, input) = plaintext_file("short.png", b"data");
    let envelope = seal(&input, &KEY);
    let bytes = fs::read(&envelope).unwrap();
    fs::write(&envelope, &bytes[..27]).unwrap();

    let result = vault::decrypt(&envelope, dir.path(), &KEY);
    assert!(matches!(result, Err(SecretSlideError::InvalidEnvelope(_))));
}

#[test]
fn envelope_without_newline_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-newline.secret");
    let mut bytes = vec![0u8; 28];
    bytes.extend_from_slice(br#"{"originalName":"x.png","mime":"image/png"}"#);
    bytes.extend_from_slice(b"ciphertext-without-delimiter");
    fs::write(&path, bytes).unwrap();

    let result = vault::decrypt(&path, dir.path(), &KEY);
    assert!(matches!(result, Err(SecretSlideError::InvalidEnvelope(_))));
}

#[test]
fn empty_key_is_missing_key() {
    let (dir, input) = plaintext_file("a.png", b"a");
    let output = dir.path().join("a.secret");

    let result = vault::encrypt(&input, &output, &[]);
    assert!(matches!(result, Err(SecretSlideError::MissingKey)));
    assert!(!output.exists());

    let result = vault::decrypt(&output, dir.path(), &[]);
    assert!(matches!(result, Err(SecretSlideError::MissingKey)));
}

#[test]
fn unwritable_output_is_io_error() {
    let (dir, input) = plaintext_file("a.png", b"a");
    let output = dir.path().join("missing-dir").join("a.secret");

    let result = vault::encrypt(&input, &output, &KEY);
    assert!(matches!(result, Err(SecretSlideError::Io(_))));
}

// ---------------------------------------------------------------------------
// MIME mapping
// ---------------------------------------------------------------------------

#[test]
fn derive_metadata_maps_extensions() {
    assert_eq!(derive_metadata(Path::new("x.png")).mime, "image/png");
    assert_eq!(derive_metadata(Path::new("x.JPG")).mime, "image/jpeg");
    assert_eq!(
        derive_metadata(Path::new("x.txt")).mime,
        "application/octet-stream"
    );
}

// ---------------------------------------------------------------------------
// Long names
// ---------------------------------------------------------------------------

#[test]
fn max_length_file_name_roundtrip() {
    let name = format!("{}.png", "a".repeat(251));
    assert_eq!(name.len(), 255);

    let (dir, input) = plaintext_file(&name, b"long name contents");
    let envelope = dir.path().join("short.enc");
    vault::encrypt(&input, &envelope, &KEY).unwrap();

    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let restored = vault::decrypt(&envelope, &out, &KEY).expect("decrypt long name");

    assert_eq!(restored.output_path, out.join(&name));
    assert_eq!(fs::read(&restored.output_path).unwrap(), b"long name contents");
    assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
}
