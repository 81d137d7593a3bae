//! Color palettes.
//!
//! The accent color is configuration. It is resolved once at startup
//! ([`AccentChoice::resolve`]) and the resulting [`Accent`] is passed to
//! [`Palette::new`]; nothing re-rolls it afterwards.

use crate::error::ZapError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Emerald,
    Blue,
    Rose,
    Orange,
}

impl Accent {
    pub const ALL: [Accent; 5] = [
        Accent::Cyan,
        Accent::Emerald,
        Accent::Blue,
        Accent::Rose,
        Accent::Orange,
    ];

    pub fn color(&self) -> Rgb {
        match self {
            Accent::Cyan => Rgb::hex(0x06B6D4),
            Accent::Emerald => Rgb::hex(0x10B981),
            Accent::Blue => Rgb::hex(0x3B82F6),
            Accent::Rose => Rgb::hex(0xF43F5E),
            Accent::Orange => Rgb::hex(0xF97316),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Emerald => "emerald",
            Accent::Blue => "blue",
            Accent::Rose => "rose",
            Accent::Orange => "orange",
        }
    }
}

/// The configured accent: a fixed color, or one picked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentChoice {
    #[default]
    Random,
    Fixed(Accent),
}

impl AccentChoice {
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Accent {
        match self {
            AccentChoice::Fixed(accent) => *accent,
            AccentChoice::Random => *Accent::ALL.choose(rng).unwrap_or(&Accent::Cyan),
        }
    }
}

impl fmt::Display for AccentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccentChoice::Random => f.write_str("random"),
            AccentChoice::Fixed(accent) => f.write_str(accent.name()),
        }
    }
}

impl FromStr for AccentChoice {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "random" {
            return Ok(AccentChoice::Random);
        }
        Accent::ALL
            .iter()
            .find(|a| a.name() == s)
            .map(|a| AccentChoice::Fixed(*a))
            .ok_or_else(|| {
                ZapError::Config(format!(
                    "Invalid accent: {} (expected random, cyan, emerald, blue, rose or orange)",
                    s
                ))
            })
    }
}

impl Serialize for AccentChoice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccentChoice {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Auto => f.write_str("auto"),
            ColorScheme::Light => f.write_str("light"),
            ColorScheme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorScheme::Auto),
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ZapError::Config(format!(
                "Invalid color scheme: {} (expected auto, light or dark)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub border: Rgb,
    pub danger: Rgb,
    pub primary: Rgb,
    pub tint: Rgb,
}

impl Palette {
    /// `dark` is the platform's answer when the scheme is `auto`.
    pub fn new(scheme: ColorScheme, accent: Accent, platform_dark: bool) -> Self {
        let dark = match scheme {
            ColorScheme::Auto => platform_dark,
            ColorScheme::Light => false,
            ColorScheme::Dark => true,
        };
        let primary = accent.color();
        if dark {
            Self {
                background: Rgb::hex(0x111827),
                card: Rgb::hex(0x1F2937),
                text: Rgb::hex(0xF9FAFB),
                text_secondary: Rgb::hex(0x9CA3AF),
                border: Rgb::hex(0x374151),
                danger: Rgb::hex(0xEF4444),
                primary,
                tint: primary,
            }
        } else {
            Self {
                background: Rgb::hex(0xF3F4F6),
                card: Rgb::hex(0xFFFFFF),
                text: Rgb::hex(0x1F2937),
                text_secondary: Rgb::hex(0x6B7280),
                border: Rgb::hex(0xE5E7EB),
                danger: Rgb::hex(0xEF4444),
                primary,
                tint: primary,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hex_colors() {
        assert_eq!(Accent::Rose.color(), Rgb(0xF4, 0x3F, 0x5E));
        assert_eq!(Accent::Cyan.color().to_string(), "#06B6D4");
    }

    #[test]
    fn fixed_accent_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                AccentChoice::Fixed(Accent::Blue).resolve(&mut rng),
                Accent::Blue
            );
        }
    }

    #[test]
    fn random_accent_is_one_of_the_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let accent = AccentChoice::Random.resolve(&mut rng);
        assert!(Accent::ALL.contains(&accent));
    }

    #[test]
    fn accent_choice_round_trips_as_string() {
        let json = serde_json::to_string(&AccentChoice::Fixed(Accent::Orange)).unwrap();
        assert_eq!(json, r#""orange""#);
        let parsed: AccentChoice = serde_json::from_str(r#""random""#).unwrap();
        assert_eq!(parsed, AccentChoice::Random);
        assert!(serde_json::from_str::<AccentChoice>(r#""purple""#).is_err());
    }

    #[test]
    fn palette_follows_scheme() {
        let light = Palette::new(ColorScheme::Light, Accent::Emerald, true);
        assert_eq!(light.background, Rgb::hex(0xF3F4F6));
        assert_eq!(light.primary, Accent::Emerald.color());

        let auto_dark = Palette::new(ColorScheme::Auto, Accent::Emerald, true);
        assert_eq!(auto_dark.background, Rgb::hex(0x111827));
        assert_eq!(auto_dark.tint, auto_dark.primary);
    }
}
