use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The set of characters pieces are drawn with.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Chess figures such as `♔`.
    #[default]
    Unicode,
    /// Notation letters such as `K`.
    Letters,
}

/// The reason why parsing [`Style`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse style")]
pub struct ParseStyleError(ron::de::SpannedError);

/// Configuration of a [`Diagram`][`crate::render::Diagram`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Style {
    /// How pieces are drawn.
    pub glyphs: Glyphs,
    /// Whether files and ranks are labeled.
    pub coordinates: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            glyphs: Glyphs::Unicode,
            coordinates: true,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_style_is_an_identity(s: Style) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[test]
    fn missing_fields_take_default_values() {
        assert_eq!("()".parse(), Ok(Style::default()));

        assert_eq!(
            "(glyphs: letters)".parse(),
            Ok(Style {
                glyphs: Glyphs::Letters,
                coordinates: true
            })
        );
    }

    #[test]
    fn parsing_style_fails_for_unknown_fields() {
        assert!("(colors: true)".parse::<Style>().is_err());
    }

    #[test]
    fn parsing_style_fails_for_unknown_glyphs() {
        assert!("(glyphs: emoji)".parse::<Style>().is_err());
    }
}
