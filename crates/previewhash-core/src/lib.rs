//! # previewhash-core
//!
//! [BlurHash](https://blurha.sh/) preview-image placeholder codec in pure
//! Rust: compress a downscaled RGBA thumbnail into a short base83 string,
//! and expand that string back into an approximate image to show while
//! the real asset loads.
//!
//! Pixels are RGBA (4 bytes per pixel, non-premultiplied). Encoding
//! ignores the alpha channel — flatten transparency onto a background
//! color before calling — and decoding always emits alpha 255. All
//! arithmetic matches the reference implementation byte-for-byte, so
//! hashes interoperate with every other conforming codec.
//!
//! ## Quick start
//!
//! ```
//! use previewhash_core::{encode, decode, is_blurhash_valid};
//!
//! // 4x4 mid-gray RGBA thumbnail -> hash
//! let pixels = vec![128u8; 4 * 4 * 4];
//! let hash = encode(&pixels, 4, 4, 4, 3).unwrap();
//! assert_eq!(hash.len(), 4 + 2 * 4 * 3);
//!
//! // hash -> 32x32 RGBA placeholder
//! assert!(is_blurhash_valid(&hash).result);
//! let placeholder = decode(&hash, 32, 32, 1.0).unwrap();
//! assert_eq!(placeholder.len(), 32 * 32 * 4);
//! ```
//!
//! Both directions are pure, synchronous functions with no shared
//! mutable state; calls may run concurrently without coordination. Cost
//! is O(width * height * components), so hand in thumbnails (the usual
//! pipeline resizes to ~64px wide first). The optional `parallel`
//! feature spreads the transform across a rayon pool for batch
//! workloads, without changing any output byte.

pub mod base83;
pub mod color;
pub mod dct;
pub mod error;
pub mod validate;

mod decode_impl;
mod encode_impl;

pub use decode_impl::decode;
pub use encode_impl::encode;
pub use error::CodecError;
pub use validate::{components, is_blurhash_valid, HashValidity};

/// Default horizontal component count used by the asset pipeline.
pub const DEFAULT_COMPONENT_X: u32 = 4;

/// Default vertical component count used by the asset pipeline.
pub const DEFAULT_COMPONENT_Y: u32 = 3;

/// Default thumbnail width images are resized to before encoding.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 64;
