//! Contact QR code rendering.
//!
//! The footer embeds a QR code pointing at the consultation blog so the
//! quote can be followed up from a phone. Rendered once at startup and
//! inlined as a data URI - no static file to serve.

use anyhow::Context;
use base64::Engine;
use image::Luma;
use qrcode::QrCode;

/// Render a URL as a PNG QR code and return it as a `data:` URI suitable
/// for an `<img src>` attribute.
pub fn data_uri(url: &str) -> anyhow::Result<String> {
    let code = QrCode::new(url.as_bytes()).context("QR encoding failed")?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(160, 160)
        .build();

    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .context("PNG encoding failed")?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(format!("data:image/png;base64,{}", encoded))
}
