//! Image signature detection for downloaded photo assets
//!
//! The asset CDN does not report a usable content type for photo renditions,
//! so the extension comes from the file's own magic numbers. Signatures are
//! tried in a fixed order; the first match wins, and no match is an error
//! rather than a guessed extension.

/// One recognized image signature
#[derive(Debug, Clone, Copy)]
pub struct ImageSignature {
    /// MIME type this signature identifies
    pub mime: &'static str,

    /// Extension applied to the downloaded file, including the dot
    pub extension: &'static str,

    matches: fn(&[u8]) -> bool,
}

/// Signatures in detection priority order. JPEG first: it is by far the most
/// common rendition the CDN serves.
pub const IMAGE_SIGNATURES: &[ImageSignature] = &[
    ImageSignature {
        mime: "image/jpeg",
        extension: ".jpg",
        matches: |b| b.starts_with(&[0xFF, 0xD8, 0xFF]),
    },
    ImageSignature {
        mime: "image/png",
        extension: ".png",
        matches: |b| b.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
    },
    ImageSignature {
        mime: "image/gif",
        extension: ".gif",
        matches: |b| b.starts_with(b"GIF87a") || b.starts_with(b"GIF89a"),
    },
    ImageSignature {
        mime: "image/webp",
        extension: ".webp",
        matches: |b| b.len() >= 12 && b.starts_with(b"RIFF") && &b[8..12] == b"WEBP",
    },
    ImageSignature {
        mime: "image/tiff",
        extension: ".tiff",
        matches: |b| b.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || b.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]),
    },
    ImageSignature {
        mime: "image/bmp",
        extension: ".bmp",
        matches: |b| b.starts_with(b"BM"),
    },
];

/// Detect the image type of a byte prefix.
///
/// Returns the first matching signature, or None when the prefix matches no
/// known image format.
pub fn detect_image(prefix: &[u8]) -> Option<&'static ImageSignature> {
    IMAGE_SIGNATURES.iter().find(|sig| (sig.matches)(prefix))
}

/// Names of the formats the detector knows, for error messages
pub fn known_formats() -> String {
    IMAGE_SIGNATURES
        .iter()
        .map(|sig| sig.mime)
        .collect::<Vec<_>>()
        .join(", ")
}
