//! QR rendering for payment request identifiers.
//!
//! The codec neither depends on nor validates any of this: rendering consumes
//! a completed identifier string and produces a scannable representation in
//! one of several formats - raw PNG bytes, a `data:` URI for embedding, SVG
//! markup, or text art for terminals and logs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::Luma;
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};

/// Output format for a rendered QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QrFormat {
    /// PNG image bytes.
    Png,
    /// PNG wrapped in a base64 `data:` URI, embeddable in HTML.
    DataUri,
    /// SVG markup.
    Svg,
    /// Unicode half-block art.
    Unicode,
    /// Character art for terminal display.
    Terminal,
}

/// Error-correction strength of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% of codewords recoverable.
    Low,
    /// ~15% recoverable.
    #[default]
    Medium,
    /// ~25% recoverable.
    Quartile,
    /// ~30% recoverable.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(value: ErrorCorrection) -> Self {
        match value {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Options for QR rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Output format.
    pub format: QrFormat,
    /// Minimum image edge in pixels (PNG and data-URI output).
    pub width: u32,
    /// Quiet zone (margin) in modules; zero disables it.
    pub quiet_zone: u32,
    /// Foreground color as a CSS value (SVG output).
    pub dark: String,
    /// Background color as a CSS value (SVG output).
    pub light: String,
    /// Error-correction strength.
    pub error_correction: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            format: QrFormat::Png,
            width: 256,
            quiet_zone: 2,
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
            error_correction: ErrorCorrection::default(),
        }
    }
}

impl QrOptions {
    /// PNG output at the given minimum width.
    pub fn png(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Base64 `data:` URI output.
    pub fn data_uri() -> Self {
        Self {
            format: QrFormat::DataUri,
            ..Self::default()
        }
    }

    /// SVG output.
    pub fn svg() -> Self {
        Self {
            format: QrFormat::Svg,
            ..Self::default()
        }
    }

    /// Unicode half-block output.
    pub fn unicode() -> Self {
        Self {
            format: QrFormat::Unicode,
            ..Self::default()
        }
    }

    /// Terminal character-art output.
    pub fn terminal() -> Self {
        Self {
            format: QrFormat::Terminal,
            ..Self::default()
        }
    }
}

/// A rendered QR code: either a string payload or raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrOutput {
    /// Textual payload (data URI, SVG, text art).
    Text(String),
    /// Raw binary image (PNG).
    Bytes(Vec<u8>),
}

impl QrOutput {
    /// The payload as bytes, whichever variant it is.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            QrOutput::Text(text) => text.into_bytes(),
            QrOutput::Bytes(bytes) => bytes,
        }
    }

    /// The textual payload, if this output has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QrOutput::Text(text) => Some(text),
            QrOutput::Bytes(_) => None,
        }
    }
}

/// Errors from QR rendering.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// The payload could not be turned into a QR code.
    #[error("QR code generation failed: {0}")]
    Generation(String),
    /// The QR matrix rendered, but image encoding failed.
    #[error("image encoding failed: {0}")]
    ImageEncoding(String),
}

/// Renders `data` as a QR code in the requested format.
pub fn render(data: &str, options: &QrOptions) -> Result<QrOutput, QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), options.error_correction.into())
        .map_err(|e| QrError::Generation(e.to_string()))?;

    match options.format {
        QrFormat::Png => render_png(&code, options).map(QrOutput::Bytes),
        QrFormat::DataUri => {
            let png = render_png(&code, options)?;
            Ok(QrOutput::Text(format!(
                "data:image/png;base64,{}",
                STANDARD.encode(png)
            )))
        }
        QrFormat::Svg => Ok(QrOutput::Text(render_svg(&code, options))),
        QrFormat::Unicode => Ok(QrOutput::Text(render_unicode(&code, options))),
        QrFormat::Terminal => Ok(QrOutput::Text(render_terminal(&code, options))),
    }
}

// Raster output is monochrome; the color options apply to SVG only.
fn render_png(code: &QrCode, options: &QrOptions) -> Result<Vec<u8>, QrError> {
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(options.quiet_zone > 0)
        .min_dimensions(options.width, options.width)
        .build();

    let mut bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut bytes);
    image::ImageEncoder::write_image(
        encoder,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::L8,
    )
    .map_err(|e| QrError::ImageEncoding(e.to_string()))?;

    Ok(bytes)
}

fn render_svg(code: &QrCode, options: &QrOptions) -> String {
    code.render()
        .quiet_zone(options.quiet_zone > 0)
        .min_dimensions(options.width, options.width)
        .dark_color(svg::Color(&options.dark))
        .light_color(svg::Color(&options.light))
        .build()
}

fn render_unicode(code: &QrCode, options: &QrOptions) -> String {
    code.render::<unicode::Dense1x2>()
        .quiet_zone(options.quiet_zone > 0)
        .build()
}

fn render_terminal(code: &QrCode, options: &QrOptions) -> String {
    code.render::<char>()
        .quiet_zone(options.quiet_zone > 0)
        .module_dimensions(2, 1)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "ethereum:0xE7C3D8C9a439feDe00D2600032D5dB0Be71C3c29@137/transfer\
                       ?address=0x1234567890123456789012345678901234567890\
                       &uint256=1000000000000000000";

    #[test]
    fn renders_png_bytes() {
        let output = render(URI, &QrOptions::png(128)).unwrap();
        let QrOutput::Bytes(bytes) = output else {
            panic!("expected bytes");
        };
        // PNG magic.
        assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn renders_data_uri() {
        let output = render(URI, &QrOptions::data_uri()).unwrap();
        let text = output.as_text().unwrap();
        assert!(text.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn renders_svg_with_colors() {
        let mut options = QrOptions::svg();
        options.dark = "#112233".to_string();
        let output = render(URI, &options).unwrap();
        let text = output.as_text().unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("#112233"));
    }

    #[test]
    fn renders_text_art() {
        for options in [QrOptions::unicode(), QrOptions::terminal()] {
            let output = render(URI, &options).unwrap();
            assert!(!output.as_text().unwrap().is_empty());
        }
    }

    #[test]
    fn refuses_oversized_payload() {
        // QR capacity tops out well below this.
        let huge = "x".repeat(8000);
        let err = render(&huge, &QrOptions::default()).unwrap_err();
        assert!(matches!(err, QrError::Generation(_)));
    }
}
