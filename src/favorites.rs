use serde::{Deserialize, Serialize};

use crate::color::{Color, Opacity};
use crate::gradient::{generate, GradientSpec};

/// A saved message + gradient. `id` is the creation time in milliseconds.
///
/// Entries written before opacities existed have none; they read back as
/// `None` and are treated as fully opaque when copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub message: String,
    pub start_color: Color,
    pub end_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_opacity: Option<Opacity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_opacity: Option<Opacity>,
}

impl Favorite {
    pub fn spec(&self) -> GradientSpec {
        GradientSpec::new(self.start_color, self.end_color).with_opacity(
            self.start_opacity.unwrap_or_default(),
            self.end_opacity.unwrap_or_default(),
        )
    }

    /// Generated code for this favorite.
    pub fn code(&self) -> String {
        generate(&self.message, &self.spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let favorite = Favorite {
            id: 1_700_000_000_000,
            message: "hi".to_string(),
            start_color: Color::new(255, 0, 0),
            end_color: Color::new(0, 0, 255),
            start_opacity: Some(Opacity(128)),
            end_opacity: Some(Opacity(255)),
        };

        let value = serde_json::to_value(&favorite).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1_700_000_000_000i64,
                "message": "hi",
                "startColor": "#FF0000",
                "endColor": "#0000FF",
                "startOpacity": 128,
                "endOpacity": 255
            })
        );
    }

    #[test]
    fn test_legacy_entry_without_opacity() {
        let favorite: Favorite = serde_json::from_str(
            r##"{"id":1,"message":"AB","startColor":"#ff0000","endColor":"#0000ff"}"##,
        )
        .unwrap();

        assert_eq!(favorite.start_opacity, None);
        assert_eq!(favorite.code(), "<FGFF0000FF>A<FG0000FFFF>B");
    }

    #[test]
    fn test_out_of_range_opacity_is_clamped_on_read() {
        let favorite: Favorite = serde_json::from_str(
            r##"{"id":1,"message":"A","startColor":"#ff0000","endColor":"#ff0000","startOpacity":512,"endOpacity":-3}"##,
        )
        .unwrap();

        assert_eq!(favorite.start_opacity, Some(Opacity(255)));
        assert_eq!(favorite.end_opacity, Some(Opacity(0)));
    }
}
