//! Test fixtures for asset resolution
//!
//! Reuses the scripted transport from the retrieval client tests and adds
//! minimal valid media byte prefixes.


/// A minimal JPEG prefix (SOI + APP0 marker)
pub fn jpeg_bytes() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend_from_slice(&[0u8; 64]);
    bytes
}

/// A minimal PNG prefix
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0u8; 32]);
    bytes
}

/// MP3-ish bytes; audio is never sniffed, so content is arbitrary
pub fn mp3_bytes() -> Vec<u8> {
    let mut bytes = b"ID3\x03\x00".to_vec();
    bytes.extend_from_slice(&[0u8; 32]);
    bytes
}
