//! Typography variant resolution.

use crate::class_list::{ClassList, StyleDescriptor};
use crate::tables::{
    default_text_element, font_weight_classes, text_align_classes, text_color_classes,
    typography_variant_classes,
};
use crate::tokens::{FontWeight, TextAlign, TextColor, TextElement, TypographyVariant};

/// Resolved typography style. The kind is the element to render.
pub type TypographyStyle = StyleDescriptor<TextElement>;

/// Inputs of [`resolve_typography_style`], built fluently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypographyRequest {
    /// Semantic variant.
    pub variant: TypographyVariant,
    /// Element override; falls back to the variant's default element.
    pub element: Option<TextElement>,
    /// Color override.
    pub color: TextColor,
    /// Weight override.
    pub weight: Option<FontWeight>,
    /// Alignment.
    pub align: Option<TextAlign>,
    /// Caller classes, appended after every resolved class.
    pub extra: Option<&'static str>,
}

impl TypographyRequest {
    /// Request for `variant` with no overrides.
    pub fn new(variant: TypographyVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Renders as `element` instead of the variant default.
    pub fn element(mut self, element: TextElement) -> Self {
        self.element = Some(element);
        self
    }

    /// Overrides the variant color.
    pub fn color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }

    /// Overrides the variant weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets text alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Appends caller classes last.
    pub fn extra(mut self, extra: &'static str) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Resolves this request.
    pub fn resolve(self) -> TypographyStyle {
        resolve_typography_style(self)
    }
}

impl From<TypographyVariant> for TypographyRequest {
    fn from(variant: TypographyVariant) -> Self {
        Self::new(variant)
    }
}

/// Resolves the element and classes of a typography block.
///
/// Overrides are appended after the variant classes (color, then weight, then alignment, then
/// caller classes), so under last-wins merging they replace the variant's baked-in color and
/// weight.
pub fn resolve_typography_style(request: impl Into<TypographyRequest>) -> TypographyStyle {
    let request = request.into();
    let element = request
        .element
        .unwrap_or_else(|| default_text_element(request.variant));

    let mut classes = ClassList::new();
    classes.push(typography_variant_classes(request.variant));
    if let Some(color) = text_color_classes(request.color) {
        classes.push(color);
    }
    if let Some(weight) = request.weight {
        classes.push(font_weight_classes(weight));
    }
    if let Some(align) = request.align {
        classes.push(text_align_classes(align));
    }

    StyleDescriptor::new(element, classes.with_extra(request.extra))
}
