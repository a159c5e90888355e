use std::str::FromStr;

use iced_core::{
    Color,
    theme::{Custom, Palette},
};
use palette::Srgb;
use serde::Deserialize;

pub const DEFAULT_THEME_NAME: &str = "Cloudboard";

/// ساختار نگهدارنده تم برنامه (پوششی بر روی تم Iced)
#[derive(Debug, Clone)]
pub struct Theme(pub iced_core::Theme);

impl Default for Theme {
    fn default() -> Self {
        Self(iced_core::Theme::Custom(default_theme().into()))
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

/// تم روشن پیش‌فرض داشبورد
pub fn default_theme() -> Custom {
    Custom::new(
        DEFAULT_THEME_NAME.to_string(),
        Palette {
            background: Color::from_rgb8(240, 245, 250),
            text: Color::from_rgb8(28, 32, 44),
            primary: Color::from_rgb8(20, 20, 120),
            success: Color::from_rgb8(56, 142, 60),
            danger: Color::from_rgb8(211, 47, 47),
            warning: Color::from_rgb8(251, 192, 45),
        },
    )
}

impl<'de> Deserialize<'de> for Theme {
    /// نام تم‌های داخلی Iced (مثلاً `"Tokyo Night"` یا `"tokyo_night"`) یا `"cloudboard"`
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        let wanted = normalize(&name);

        if wanted == normalize(DEFAULT_THEME_NAME) {
            return Ok(Theme::default());
        }

        iced_core::Theme::ALL
            .iter()
            .find(|theme| normalize(&theme.to_string()) == wanted)
            .cloned()
            .map(Theme)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown theme: {name}")))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// تبدیل کد رنگ هگز (`#rgb`، `#rrggbb` یا `#rrggbbaa`) به ساختار Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;

    if !digits.is_ascii() {
        return None;
    }

    match digits.len() {
        3 | 6 => {
            let rgb = Srgb::<u8>::from_str(digits).ok()?;
            Some(Color::from_rgb8(rgb.red, rgb.green, rgb.blue))
        }
        8 => {
            let rgb = Srgb::<u8>::from_str(&digits[..6]).ok()?;
            let alpha = u8::from_str_radix(&digits[6..], 16).ok()?;
            Some(Color::from_rgba8(
                rgb.red,
                rgb.green,
                rgb.blue,
                f32::from(alpha) / 255.0,
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(hex_to_color("#0f0"), Some(Color::from_rgb8(0, 255, 0)));

        let translucent = hex_to_color("#0000ff80").unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_non_hex_tokens() {
        assert_eq!(hex_to_color("red"), None);
        assert_eq!(hex_to_color("#12345"), None);
        assert_eq!(hex_to_color("#gg0000"), None);
        assert_eq!(hex_to_color("#ééé"), None);
    }

    #[test]
    fn deserializes_builtin_and_default_names() {
        let theme: Theme = serde_json::from_str(r#""tokyo_night""#).unwrap();
        assert_eq!(theme.0, iced_core::Theme::TokyoNight);

        let theme: Theme = serde_json::from_str(r#""Dark""#).unwrap();
        assert_eq!(theme.0, iced_core::Theme::Dark);

        let theme: Theme = serde_json::from_str(r#""cloudboard""#).unwrap();
        assert_eq!(theme.0.to_string(), DEFAULT_THEME_NAME);

        assert!(serde_json::from_str::<Theme>(r#""neon""#).is_err());
    }
}
