//! Static lookup tables from semantic tokens to utility class fragments.
//!
//! Fragments are whitespace-separated class strings; [`crate::ClassList::push`] splits them.
//! Tables are exhaustive `match`es over closed enums, so adding a token without a table row is
//! a compile error.

use crate::tokens::{ButtonSize, FontWeight, Size, TextAlign, TextColor, TextElement, TypographyVariant};

/// Text size and padding for a badge.
pub const fn badge_size_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "text-xs px-2 py-0.5",
        Size::Default => "text-sm px-2.5 py-1",
        Size::Lg => "text-sm px-3 py-1.5",
    }
}

/// Height and padding for a button.
pub const fn button_size_classes(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "h-9 rounded-md px-3",
        ButtonSize::Default => "h-10 px-4 py-2",
        ButtonSize::Lg => "h-11 rounded-md px-8",
        ButtonSize::Icon => "h-10 w-10",
    }
}

/// Font size, weight, and color baked into a typography variant.
pub const fn typography_variant_classes(variant: TypographyVariant) -> &'static str {
    match variant {
        TypographyVariant::Heading1 => "text-2xl font-bold text-gray-900",
        TypographyVariant::Heading2 => "text-xl font-semibold text-gray-900",
        TypographyVariant::Heading3 => "text-lg font-medium text-gray-900",
        TypographyVariant::Body => "text-sm text-gray-600",
        TypographyVariant::Caption => "text-xs text-gray-500",
        TypographyVariant::Label => "text-sm font-medium text-gray-700",
    }
}

/// Element a typography variant renders as when the caller does not override it.
pub const fn default_text_element(variant: TypographyVariant) -> TextElement {
    match variant {
        TypographyVariant::Heading1 => TextElement::H1,
        TypographyVariant::Heading2 => TextElement::H2,
        TypographyVariant::Heading3 => TextElement::H3,
        TypographyVariant::Body => TextElement::P,
        TypographyVariant::Caption => TextElement::Span,
        TypographyVariant::Label => TextElement::Label,
    }
}

/// Color override class, or `None` to keep the variant color.
pub const fn text_color_classes(color: TextColor) -> Option<&'static str> {
    match color {
        TextColor::Primary => Some("text-primary"),
        TextColor::Secondary => Some("text-secondary-foreground"),
        TextColor::Muted => Some("text-muted-foreground"),
        TextColor::Accent => Some("text-accent-foreground"),
        TextColor::Default => None,
    }
}

/// Font weight class.
pub const fn font_weight_classes(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Light => "font-light",
        FontWeight::Normal => "font-normal",
        FontWeight::Medium => "font-medium",
        FontWeight::Semibold => "font-semibold",
        FontWeight::Bold => "font-bold",
    }
}

/// Text alignment class.
pub const fn text_align_classes(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "text-left",
        TextAlign::Center => "text-center",
        TextAlign::Right => "text-right",
    }
}

/// Inner padding of a metric card.
pub const fn metric_card_padding_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "p-4",
        Size::Default => "p-6",
        Size::Lg => "p-8",
    }
}

/// Font size of a metric card's headline value.
pub const fn metric_value_size_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "text-lg",
        Size::Default => "text-2xl",
        Size::Lg => "text-3xl",
    }
}

/// Dimensions of a metric card's icon.
pub const fn metric_icon_size_classes(size: Size) -> &'static str {
    match size {
        Size::Sm => "w-4 h-4",
        Size::Default => "w-6 h-6",
        Size::Lg => "w-8 h-8",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tokens::StyleToken;

    fn assert_disjoint(table: fn(Size) -> &'static str) {
        let mut seen = HashSet::new();
        for size in Size::ALL {
            assert!(seen.insert(table(*size)), "duplicate row for {size}");
        }
    }

    #[test]
    fn size_tables_have_distinct_rows() {
        assert_disjoint(badge_size_classes);
        assert_disjoint(metric_card_padding_classes);
        assert_disjoint(metric_value_size_classes);
        assert_disjoint(metric_icon_size_classes);

        let buttons: HashSet<_> = ButtonSize::ALL.iter().map(|size| button_size_classes(*size)).collect();
        assert_eq!(buttons.len(), ButtonSize::ALL.len());
    }

    #[test]
    fn every_typography_variant_has_a_default_element() {
        let elements: Vec<_> = TypographyVariant::ALL
            .iter()
            .map(|variant| default_text_element(*variant))
            .collect();
        assert_eq!(
            elements,
            vec![
                TextElement::H1,
                TextElement::H2,
                TextElement::H3,
                TextElement::P,
                TextElement::Span,
                TextElement::Label,
            ]
        );
    }

    #[test]
    fn only_default_color_leaves_the_variant_color_alone() {
        for color in TextColor::ALL {
            assert_eq!(text_color_classes(*color).is_none(), *color == TextColor::Default);
        }
    }
}
