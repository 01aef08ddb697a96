// SPDX-License-Identifier: MPL-2.0
//! Auto-fit mode for the inline image.
//!
//! Exactly one display dimension can be auto-fit (shrink to the image's
//! natural size); the other is externally supplied or fills the window.

use iced::Length;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which display dimension of the inline image is auto-fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AutoMode {
    /// Height follows the image; width is supplied or fills.
    #[default]
    Height,
    /// Width follows the image; height is supplied or fills.
    Width,
    /// Both dimensions are supplied or fill.
    None,
}

impl AutoMode {
    /// Resolves the widget lengths for the inline image.
    ///
    /// The auto-fit dimension becomes [`Length::Shrink`]; the other uses
    /// the supplied value, or fills the available space when none is given.
    #[must_use]
    pub fn resolve(self, width: Option<f32>, height: Option<f32>) -> (Length, Length) {
        match self {
            AutoMode::Height => (supplied(width), Length::Shrink),
            AutoMode::Width => (Length::Shrink, supplied(height)),
            AutoMode::None => (supplied(width), supplied(height)),
        }
    }
}

fn supplied(value: Option<f32>) -> Length {
    value.map_or(Length::Fill, Length::Fixed)
}

impl FromStr for AutoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(AutoMode::Height),
            "width" => Ok(AutoMode::Width),
            "none" => Ok(AutoMode::None),
            other => Err(format!(
                "invalid auto mode '{other}', expected height, width or none"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shrink_count(lengths: (Length, Length)) -> usize {
        [lengths.0, lengths.1]
            .iter()
            .filter(|l| **l == Length::Shrink)
            .count()
    }

    #[test]
    fn height_and_width_modes_auto_fit_exactly_one_dimension() {
        assert_eq!(shrink_count(AutoMode::Height.resolve(None, None)), 1);
        assert_eq!(shrink_count(AutoMode::Width.resolve(None, None)), 1);
        assert_eq!(
            shrink_count(AutoMode::Height.resolve(Some(320.0), Some(200.0))),
            1
        );
        assert_eq!(
            shrink_count(AutoMode::Width.resolve(Some(320.0), Some(200.0))),
            1
        );
    }

    #[test]
    fn none_mode_auto_fits_neither_dimension() {
        assert_eq!(shrink_count(AutoMode::None.resolve(None, None)), 0);
        assert_eq!(
            shrink_count(AutoMode::None.resolve(Some(320.0), Some(200.0))),
            0
        );
    }

    #[test]
    fn height_mode_shrinks_height_and_keeps_supplied_width() {
        let (width, height) = AutoMode::Height.resolve(Some(320.0), None);
        assert_eq!(width, Length::Fixed(320.0));
        assert_eq!(height, Length::Shrink);
    }

    #[test]
    fn width_mode_shrinks_width_and_keeps_supplied_height() {
        let (width, height) = AutoMode::Width.resolve(None, Some(240.0));
        assert_eq!(width, Length::Shrink);
        assert_eq!(height, Length::Fixed(240.0));
    }

    #[test]
    fn missing_supplied_dimension_fills() {
        let (width, height) = AutoMode::None.resolve(None, None);
        assert_eq!(width, Length::Fill);
        assert_eq!(height, Length::Fill);
    }

    #[test]
    fn default_mode_is_height() {
        assert_eq!(AutoMode::default(), AutoMode::Height);
    }

    #[test]
    fn parses_from_cli_strings() {
        assert_eq!("height".parse::<AutoMode>().unwrap(), AutoMode::Height);
        assert_eq!("width".parse::<AutoMode>().unwrap(), AutoMode::Width);
        assert_eq!("none".parse::<AutoMode>().unwrap(), AutoMode::None);
        assert!("both".parse::<AutoMode>().is_err());
    }
}
