//! Color tokens and palettes for project layers.
//!
//! Colors are carried as the token the map client understands: a CSS color
//! name (`teal`) or a hex string (`#rgb`, `#rrggbb`, `#rrggbbaa`). Tokens
//! read from configuration are checked up front so a typo fails at startup
//! instead of drawing invisible markers.

use serde::{Deserialize, Serialize};

/// Color token handed to the rendering client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub String);

impl Color {
    /// Wrap a token without checking it.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse a token, rejecting anything that is neither a hex color nor a
    /// plain alphabetic color name.
    pub fn parse(token: &str) -> Result<Self, StyleError> {
        let token = token.trim();
        if is_hex_color(token) || is_color_name(token) {
            Ok(Self::new(token))
        } else {
            Err(StyleError::InvalidColor(token.to_string()))
        }
    }

    /// Neutral color used when a project has no assigned color.
    pub fn fallback() -> Self {
        Self::new("gray")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

fn is_hex_color(token: &str) -> bool {
    token.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn is_color_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Fixed, ordered, non-empty list of colors cycled over projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, rejecting an empty list and invalid color tokens.
    pub fn new(colors: Vec<Color>) -> Result<Self, StyleError> {
        if colors.is_empty() {
            return Err(StyleError::EmptyPalette);
        }
        let colors = colors
            .iter()
            .map(|color| Color::parse(color.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Build a palette from color tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tokens.into_iter().map(Color::new).collect())
    }

    /// Color for the given catalog position, wrapping past the end.
    pub fn color_at(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ["blue", "red", "green", "orange", "purple", "cyan"]
                .into_iter()
                .map(Color::new)
                .collect(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = StyleError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
