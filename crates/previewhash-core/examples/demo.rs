//! End-to-end walkthrough: encode an RGBA gradient, inspect the hash,
//! decode it back into a placeholder image.
//!
//! Run with: cargo run --example demo

use previewhash_core::{
    components, decode, encode, is_blurhash_valid, DEFAULT_COMPONENT_X, DEFAULT_COMPONENT_Y,
};

fn main() {
    // A 4x4 RGBA gradient: red ramps left-to-right, green top-to-bottom.
    let width = 4usize;
    let height = 4usize;
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / (width - 1) as f32) * 255.0) as u8;
            let g = ((y as f32 / (height - 1) as f32) * 255.0) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }
    println!("source: {width}x{height} RGBA gradient ({} bytes)", pixels.len());

    let hash = encode(
        &pixels,
        width as u32,
        height as u32,
        DEFAULT_COMPONENT_X,
        DEFAULT_COMPONENT_Y,
    )
    .expect("encode failed");
    println!("hash:   {hash} ({} chars)", hash.len());

    let verdict = is_blurhash_valid(&hash);
    let (cx, cy) = components(&hash).expect("components failed");
    println!("valid:  {} | components {cx}x{cy}", verdict.result);

    let placeholder = decode(&hash, 32, 32, 1.0).expect("decode failed");
    println!(
        "decode: 32x32 RGBA ({} bytes), first pixel ({}, {}, {}, {})",
        placeholder.len(),
        placeholder[0],
        placeholder[1],
        placeholder[2],
        placeholder[3]
    );

    // Punch above 1.0 exaggerates the detail contrast.
    let punched = decode(&hash, 32, 32, 2.0).expect("decode failed");
    println!(
        "punch 2: first pixel ({}, {}, {}, {})",
        punched[0], punched[1], punched[2], punched[3]
    );
}
