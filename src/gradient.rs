// グラデーションタグ生成 - メッセージの各文字に <FG{RRGGBB}{AA}> を付与する

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Opacity};
use crate::config::gradient::{SPAN_CLOSE, SPAN_OPEN, TAG_PREFIX, TAG_SUFFIX};
use crate::errors::AppResult;

/// Endpoints of one gradient. Immutable for the duration of a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
    #[serde(default)]
    pub start_opacity: Opacity,
    #[serde(default)]
    pub end_opacity: Opacity,
}

impl GradientSpec {
    /// Fully opaque gradient between two colors.
    pub fn new(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            start_opacity: Opacity::OPAQUE,
            end_opacity: Opacity::OPAQUE,
        }
    }

    pub fn with_opacity(mut self, start_opacity: Opacity, end_opacity: Opacity) -> Self {
        self.start_opacity = start_opacity;
        self.end_opacity = end_opacity;
        self
    }

    /// Color tag for interpolation fraction `t` in [0, 1].
    pub fn tag_at(&self, t: f64) -> String {
        let color = self.start.lerp(&self.end, t);
        let alpha = self.start_opacity.lerp(self.end_opacity, t);
        format!("{TAG_PREFIX}{color}{alpha}{TAG_SUFFIX}")
    }
}

/// Wrap every plain character of `text` in a gradient color tag.
///
/// Substrings from `<` to the next `>` are copied verbatim and receive no tag.
/// An unterminated `<` is an ordinary character. The fraction for a character
/// is its UTF-16 offset over `units - 1`, so tag spans still take up positions
/// of the gradient.
pub fn generate(text: &str, spec: &GradientSpec) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let units = text.encode_utf16().count();
    let mut output = String::with_capacity(text.len() * 13);

    let mut i = 0;
    // 現在位置の UTF-16 オフセット
    let mut pos = 0;
    while i < len {
        if chars[i] == SPAN_OPEN {
            if let Some(offset) = chars[i..].iter().position(|&c| c == SPAN_CLOSE) {
                let end = i + offset;
                output.extend(&chars[i..=end]);
                pos += chars[i..=end].iter().map(|c| c.len_utf16()).sum::<usize>();
                i = end + 1;
                continue;
            }
        }

        let t = if units > 1 {
            pos as f64 / (units - 1) as f64
        } else {
            0.0
        };
        output.push_str(&spec.tag_at(t));
        output.push(chars[i]);
        pos += chars[i].len_utf16();
        i += 1;
    }

    debug!("generated {} bytes of tagged text from {} code units", output.len(), units);
    output
}

/// Parse hex colors and clamp raw opacities, then generate.
pub fn generate_from_hex(
    text: &str,
    start: &str,
    end: &str,
    start_opacity: i64,
    end_opacity: i64,
) -> AppResult<String> {
    let spec = GradientSpec::new(Color::from_hex(start)?, Color::from_hex(end)?).with_opacity(
        Opacity::clamped(start_opacity),
        Opacity::clamped(end_opacity),
    );
    Ok(generate(text, &spec))
}
