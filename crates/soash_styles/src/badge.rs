//! Badge variant resolution.

use serde::Serialize;

use crate::class_list::{ClassList, StyleDescriptor};
use crate::tables::badge_size_classes;
use crate::tokens::{BadgeKind, BadgeVariant, PerformanceLevel, Size};

const BADGE_BASE: &str = "font-medium";
const BADGE_TRANSITION: &str = "transition-colors duration-200";

/// Resolved badge style.
pub type BadgeStyle = StyleDescriptor<BadgeKind>;

/// Background, text, and border classes of a semantic color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    /// Background class.
    pub background: &'static str,
    /// Text color class.
    pub text: &'static str,
    /// Border color class.
    pub border: &'static str,
}

impl Palette {
    /// Content insights.
    pub const BLUE: Self = Self::new("bg-blue-50", "text-blue-700", "border-blue-200");
    /// Timing insights and high performance.
    pub const GREEN: Self = Self::new("bg-green-50", "text-green-700", "border-green-200");
    /// Strategy insights.
    pub const PURPLE: Self = Self::new("bg-purple-50", "text-purple-700", "border-purple-200");
    /// Medium performance.
    pub const YELLOW: Self = Self::new("bg-yellow-50", "text-yellow-700", "border-yellow-200");
    /// Low performance.
    pub const RED: Self = Self::new("bg-red-50", "text-red-700", "border-red-200");

    const fn new(background: &'static str, text: &'static str, border: &'static str) -> Self {
        Self {
            background,
            text,
            border,
        }
    }

    /// The three classes in background, text, border order.
    pub fn classes(self) -> [&'static str; 3] {
        [self.background, self.text, self.border]
    }
}

/// Palette a badge variant paints with, if any.
///
/// `performance` badges take their palette from `level` alone and get none when `level` is
/// absent; `level` is ignored for every other variant.
pub fn badge_palette(variant: BadgeVariant, level: Option<PerformanceLevel>) -> Option<Palette> {
    match variant {
        BadgeVariant::Content => Some(Palette::BLUE),
        BadgeVariant::Timing => Some(Palette::GREEN),
        BadgeVariant::Strategy => Some(Palette::PURPLE),
        BadgeVariant::Performance => level.map(|level| match level {
            PerformanceLevel::High => Palette::GREEN,
            PerformanceLevel::Medium => Palette::YELLOW,
            PerformanceLevel::Low => Palette::RED,
        }),
        BadgeVariant::Default
        | BadgeVariant::Secondary
        | BadgeVariant::Destructive
        | BadgeVariant::Outline => None,
    }
}

/// Underlying badge kind for a semantic variant.
pub fn badge_kind(variant: BadgeVariant) -> BadgeKind {
    match variant {
        BadgeVariant::Content
        | BadgeVariant::Timing
        | BadgeVariant::Strategy
        | BadgeVariant::Performance
        | BadgeVariant::Outline => BadgeKind::Outline,
        BadgeVariant::Default => BadgeKind::Default,
        BadgeVariant::Secondary => BadgeKind::Secondary,
        BadgeVariant::Destructive => BadgeKind::Destructive,
    }
}

/// Resolves a badge's underlying kind and classes.
///
/// Classes are composed as base, size, palette, then transition.
pub fn resolve_badge_style(
    variant: BadgeVariant,
    level: Option<PerformanceLevel>,
    size: Size,
) -> BadgeStyle {
    let mut classes = ClassList::new();
    classes.push(BADGE_BASE).push(badge_size_classes(size));
    if let Some(palette) = badge_palette(variant, level) {
        for class in palette.classes() {
            classes.push(class);
        }
    }
    classes.push(BADGE_TRANSITION);

    StyleDescriptor::new(badge_kind(variant), classes)
}
