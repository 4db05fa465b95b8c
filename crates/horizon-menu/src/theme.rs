//! Menu item theming.
//!
//! A [`MenuTheme`] holds one [`ItemColors`] set per [`ColorState`] plus the
//! metrics used when laying out arrows and labels. Themes are plain values that
//! are injected into items (usually as an `Arc<MenuTheme>` shared by every item
//! of a menu); there is no process-wide theme.
//!
//! # Loading from TOML
//!
//! ```
//! use horizon_menu::MenuTheme;
//!
//! let theme = MenuTheme::from_toml_str(r##"
//! [hovered]
//! text = "#000000"
//! arrow = "#000000"
//!
//! [metrics]
//! arrow_spacing = 4.0
//! "##).unwrap();
//!
//! assert_eq!(theme.arrow_spacing, 4.0);
//! ```
//!
//! Sections and fields that are left out keep the values of
//! [`MenuTheme::light`].

use horizon_menu_core::logging::targets;
use horizon_menu_core::{Color, Size};
use serde::Deserialize;

use crate::error::ThemeError;

/// The visual state an item is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorState {
    /// Enabled and not selected.
    #[default]
    Normal,
    /// Enabled and currently selected in its menu.
    Hovered,
    /// Disabled, regardless of selection.
    Disabled,
}

impl ColorState {
    /// Pick the state for an item. Disabled wins over selection.
    pub fn resolve(enabled: bool, selected: bool) -> Self {
        if !enabled {
            Self::Disabled
        } else if selected {
            Self::Hovered
        } else {
            Self::Normal
        }
    }
}

/// Colors used to draw one item in one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemColors {
    /// Label text color.
    pub text: Color,
    /// Navigation arrow color.
    pub arrow: Color,
}

/// Colors and metrics shared by the items of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTheme {
    pub normal: ItemColors,
    pub hovered: ItemColors,
    pub disabled: ItemColors,
    /// Size of each navigation arrow glyph.
    pub arrow_size: Size,
    /// Gap between an arrow and the label.
    pub arrow_spacing: f32,
    /// Inner padding on the right edge of the item.
    pub padding: f32,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl MenuTheme {
    /// White text on a dark menu, black text on the highlighted row.
    pub fn light() -> Self {
        Self {
            normal: ItemColors {
                text: Color::WHITE,
                arrow: Color::WHITE,
            },
            hovered: ItemColors {
                text: Color::BLACK,
                arrow: Color::BLACK,
            },
            disabled: ItemColors {
                text: Color::from_rgb8(163, 159, 148),
                arrow: Color::from_rgb8(163, 159, 148),
            },
            arrow_size: Size::new(30.0, 30.0),
            arrow_spacing: 0.0,
            padding: 6.0,
        }
    }

    /// Dark text for light menu backgrounds.
    pub fn dark() -> Self {
        Self {
            normal: ItemColors {
                text: Color::from_rgb8(33, 37, 41),
                arrow: Color::from_rgb8(73, 80, 87),
            },
            hovered: ItemColors {
                text: Color::WHITE,
                arrow: Color::WHITE,
            },
            disabled: ItemColors {
                text: Color::from_rgb8(173, 181, 189),
                arrow: Color::from_rgb8(173, 181, 189),
            },
            ..Self::light()
        }
    }

    /// Get the colors for a state.
    pub fn colors(&self, state: ColorState) -> ItemColors {
        match state {
            ColorState::Normal => self.normal,
            ColorState::Hovered => self.hovered,
            ColorState::Disabled => self.disabled,
        }
    }

    /// Parse a theme from a TOML document, starting from [`MenuTheme::light`].
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(source)?;
        let mut theme = Self::light();

        apply_colors(&mut theme.normal, file.normal, "normal")?;
        apply_colors(&mut theme.hovered, file.hovered, "hovered")?;
        apply_colors(&mut theme.disabled, file.disabled, "disabled")?;

        if let Some(metrics) = file.metrics {
            if let Some([width, height]) = metrics.arrow_size {
                theme.arrow_size = Size::new(width, height);
            }
            if let Some(spacing) = metrics.arrow_spacing {
                theme.arrow_spacing = spacing;
            }
            if let Some(padding) = metrics.padding {
                theme.padding = padding;
            }
        }

        tracing::debug!(target: targets::THEME, "loaded menu theme from TOML");
        Ok(theme)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    normal: Option<ColorsFile>,
    hovered: Option<ColorsFile>,
    disabled: Option<ColorsFile>,
    metrics: Option<MetricsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorsFile {
    text: Option<String>,
    arrow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetricsFile {
    arrow_size: Option<[f32; 2]>,
    arrow_spacing: Option<f32>,
    padding: Option<f32>,
}

fn apply_colors(
    target: &mut ItemColors,
    source: Option<ColorsFile>,
    section: &str,
) -> Result<(), ThemeError> {
    let Some(source) = source else {
        return Ok(());
    };
    if let Some(text) = source.text {
        target.text = parse_color(&format!("{section}.text"), &text)?;
    }
    if let Some(arrow) = source.arrow {
        target.arrow = parse_color(&format!("{section}.arrow"), &arrow)?;
    }
    Ok(())
}

fn parse_color(field: &str, value: &str) -> Result<Color, ThemeError> {
    Color::from_hex(value).ok_or_else(|| ThemeError::invalid_color(field, value))
}
