//! Closed semantic token enums accepted by the resolvers.
//!
//! Every enum carries a canonical kebab-case token that is shared by [`std::str::FromStr`],
//! [`std::fmt::Display`], and the serde representation, so props loaded from JSON and props
//! parsed from markup attributes always agree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common surface of every semantic style token.
pub trait StyleToken: Copy + Sized + 'static {
    /// Human-readable token family name used in parse errors.
    const KIND: &'static str;

    /// Every value of the token family in declaration order.
    const ALL: &'static [Self];

    /// Canonical kebab-case token.
    fn token(self) -> &'static str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A string did not name any value of a token family.
#[error("unknown {kind} token `{value}`")]
pub struct TokenParseError {
    /// Token family that was being parsed.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

/// Parses a canonical token into its enum value.
///
/// # Errors
///
/// Returns [`TokenParseError`] when `raw` does not match any token of `T` exactly.
pub fn parse_token<T: StyleToken>(raw: &str) -> Result<T, TokenParseError> {
    T::ALL
        .iter()
        .copied()
        .find(|value| value.token() == raw)
        .ok_or_else(|| TokenParseError {
            kind: T::KIND,
            value: raw.to_string(),
        })
}

macro_rules! style_token {
    ($ty:ident, $kind:literal, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl StyleToken for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl $ty {
            /// Canonical kebab-case token.
            pub fn token(self) -> &'static str {
                StyleToken::token(self)
            }
        }

        impl FromStr for $ty {
            type Err = TokenParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_token(raw)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(StyleToken::token(*self))
            }
        }
    };
}

/// Shared three-step size scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Default,
    /// Spacious.
    Lg,
}

style_token!(Size, "size", {
    Sm => "sm",
    Default => "default",
    Lg => "lg",
});

/// Button sizing scale, which adds a square icon-only slot to [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Regular button.
    #[default]
    Default,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

style_token!(ButtonSize, "button size", {
    Sm => "sm",
    Default => "default",
    Lg => "lg",
    Icon => "icon",
});

impl From<Size> for ButtonSize {
    fn from(size: Size) -> Self {
        match size {
            Size::Sm => Self::Sm,
            Size::Default => Self::Default,
            Size::Lg => Self::Lg,
        }
    }
}

/// Semantic badge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    /// Blue content insight badge.
    Content,
    /// Green timing insight badge.
    Timing,
    /// Purple strategy insight badge.
    Strategy,
    /// Badge colored by a [`PerformanceLevel`].
    Performance,
    /// Plain primitive badge.
    #[default]
    Default,
    /// Muted primitive badge.
    Secondary,
    /// Destructive primitive badge.
    Destructive,
    /// Outlined primitive badge.
    Outline,
}

style_token!(BadgeVariant, "badge variant", {
    Content => "content",
    Timing => "timing",
    Strategy => "strategy",
    Performance => "performance",
    Default => "default",
    Secondary => "secondary",
    Destructive => "destructive",
    Outline => "outline",
});

/// Badge configuration understood by the underlying primitive badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    /// Filled badge.
    #[default]
    Default,
    /// Muted badge.
    Secondary,
    /// Destructive badge.
    Destructive,
    /// Outlined badge.
    Outline,
}

style_token!(BadgeKind, "badge kind", {
    Default => "default",
    Secondary => "secondary",
    Destructive => "destructive",
    Outline => "outline",
});

/// Performance grade for [`BadgeVariant::Performance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceLevel {
    /// Above target.
    High,
    /// Near target.
    Medium,
    /// Below target.
    Low,
}

style_token!(PerformanceLevel, "performance level", {
    High => "high",
    Medium => "medium",
    Low => "low",
});

/// Semantic button variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Gradient call-to-action.
    Primary,
    /// Light bordered button.
    Secondary,
    /// Plain primitive button.
    #[default]
    Default,
    /// Destructive primitive button.
    Destructive,
    /// Outlined primitive button.
    Outline,
    /// Borderless primitive button.
    Ghost,
    /// Link-styled primitive button.
    Link,
}

style_token!(ButtonVariant, "button variant", {
    Primary => "primary",
    Secondary => "secondary",
    Default => "default",
    Destructive => "destructive",
    Outline => "outline",
    Ghost => "ghost",
    Link => "link",
});

/// Button configuration understood by the underlying primitive button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    /// Filled button.
    #[default]
    Default,
    /// Muted button.
    Secondary,
    /// Destructive button.
    Destructive,
    /// Outlined button.
    Outline,
    /// Borderless button.
    Ghost,
    /// Link-styled button.
    Link,
}

style_token!(ButtonKind, "button kind", {
    Default => "default",
    Secondary => "secondary",
    Destructive => "destructive",
    Outline => "outline",
    Ghost => "ghost",
    Link => "link",
});

/// Semantic typography variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Page title.
    Heading1,
    /// Section title.
    Heading2,
    /// Subsection title.
    Heading3,
    /// Running text.
    #[default]
    Body,
    /// Small metadata text.
    Caption,
    /// Form and field label.
    Label,
}

style_token!(TypographyVariant, "typography variant", {
    Heading1 => "heading1",
    Heading2 => "heading2",
    Heading3 => "heading3",
    Body => "body",
    Caption => "caption",
    Label => "label",
});

/// HTML element a typography block renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextElement {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<p>`
    P,
    /// `<span>`
    Span,
    /// `<div>`
    Div,
    /// `<label>`
    Label,
}

style_token!(TextElement, "text element", {
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    P => "p",
    Span => "span",
    Div => "div",
    Label => "label",
});

/// Text color override. [`TextColor::Default`] keeps the variant's own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextColor {
    /// Theme primary.
    Primary,
    /// Secondary foreground.
    Secondary,
    /// Muted foreground.
    Muted,
    /// Accent foreground.
    Accent,
    /// Variant color.
    #[default]
    Default,
}

style_token!(TextColor, "text color", {
    Primary => "primary",
    Secondary => "secondary",
    Muted => "muted",
    Accent => "accent",
    Default => "default",
});

/// Font weight override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// 300
    Light,
    /// 400
    Normal,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
}

style_token!(FontWeight, "font weight", {
    Light => "light",
    Normal => "normal",
    Medium => "medium",
    Semibold => "semibold",
    Bold => "bold",
});

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    /// Start-aligned.
    Left,
    /// Centered.
    Center,
    /// End-aligned.
    Right,
}

style_token!(TextAlign, "text alignment", {
    Left => "left",
    Center => "center",
    Right => "right",
});

/// Direction of a metric trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendDirection {
    /// Improving.
    Up,
    /// Declining.
    Down,
    /// Flat.
    Neutral,
}

style_token!(TrendDirection, "trend direction", {
    Up => "up",
    Down => "down",
    Neutral => "neutral",
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::de::DeserializeOwned;

    use super::*;

    fn assert_serde_matches_token<T>()
    where
        T: StyleToken + Serialize + DeserializeOwned + PartialEq + fmt::Debug,
    {
        for value in T::ALL {
            let json = serde_json::to_value(value).expect("serialize token");
            assert_eq!(json, serde_json::Value::String(value.token().to_string()));
            let back: T = serde_json::from_value(json).expect("deserialize token");
            assert_eq!(&back, value);
        }
    }

    #[test]
    fn serde_names_agree_with_tokens() {
        assert_serde_matches_token::<Size>();
        assert_serde_matches_token::<ButtonSize>();
        assert_serde_matches_token::<BadgeVariant>();
        assert_serde_matches_token::<BadgeKind>();
        assert_serde_matches_token::<PerformanceLevel>();
        assert_serde_matches_token::<ButtonVariant>();
        assert_serde_matches_token::<ButtonKind>();
        assert_serde_matches_token::<TypographyVariant>();
        assert_serde_matches_token::<TextElement>();
        assert_serde_matches_token::<TextColor>();
        assert_serde_matches_token::<FontWeight>();
        assert_serde_matches_token::<TextAlign>();
        assert_serde_matches_token::<TrendDirection>();
    }

    #[test]
    fn parses_known_tokens_and_rejects_unknown_ones() {
        assert_eq!("heading2".parse::<TypographyVariant>(), Ok(TypographyVariant::Heading2));
        assert_eq!("icon".parse::<ButtonSize>(), Ok(ButtonSize::Icon));
        assert_eq!(
            "huge".parse::<Size>(),
            Err(TokenParseError {
                kind: "size",
                value: "huge".to_string(),
            })
        );
        assert_eq!(
            "Primary".parse::<ButtonVariant>().unwrap_err().to_string(),
            "unknown button variant token `Primary`"
        );
    }

    #[test]
    fn defaults_match_component_defaults() {
        assert_eq!(Size::default(), Size::Default);
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(TypographyVariant::default(), TypographyVariant::Body);
        assert_eq!(TextColor::default(), TextColor::Default);
    }

    #[test]
    fn display_prints_the_token() {
        assert_eq!(BadgeVariant::Strategy.to_string(), "strategy");
        assert_eq!(ButtonSize::from(Size::Lg), ButtonSize::Lg);
    }
}
