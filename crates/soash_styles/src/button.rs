//! Button variant resolution.

use crate::class_list::{ClassList, StyleDescriptor};
use crate::tables::button_size_classes;
use crate::tokens::{ButtonKind, ButtonSize, ButtonVariant};

const BUTTON_TRANSITION: &str = "transition-all duration-200 ease-in-out";

const GRADIENT_CLASSES: &[&str] = &[
    "bg-gradient-to-r from-blue-500 to-purple-600",
    "hover:from-blue-600 hover:to-purple-700",
    "text-white font-medium",
    "shadow-md hover:shadow-lg",
    "transform hover:-translate-y-0.5 active:translate-y-0",
];

const SECONDARY_CLASSES: &[&str] = &[
    "bg-white border border-gray-200 text-gray-900",
    "hover:bg-gray-50 hover:border-gray-300",
    "font-medium",
];

/// Resolved button style.
pub type ButtonStyle = StyleDescriptor<ButtonKind>;

/// Whether a button paints the gradient call-to-action treatment.
pub fn is_gradient_primary(variant: ButtonVariant, gradient: bool) -> bool {
    variant == ButtonVariant::Primary || gradient
}

fn passthrough_kind(variant: ButtonVariant) -> ButtonKind {
    match variant {
        ButtonVariant::Primary | ButtonVariant::Default => ButtonKind::Default,
        ButtonVariant::Secondary => ButtonKind::Secondary,
        ButtonVariant::Destructive => ButtonKind::Destructive,
        ButtonVariant::Outline => ButtonKind::Outline,
        ButtonVariant::Ghost => ButtonKind::Ghost,
        ButtonVariant::Link => ButtonKind::Link,
    }
}

/// Resolves a button's underlying kind and classes.
///
/// Gradient buttons (`primary`, or any variant with `gradient` set) render as the filled
/// primitive with the gradient, elevation, and lift classes. Plain `secondary` buttons get the
/// light bordered treatment. Every other variant passes straight through with only the shared
/// transition. Classes are composed as transition, size, then treatment.
pub fn resolve_button_style(variant: ButtonVariant, gradient: bool, size: ButtonSize) -> ButtonStyle {
    let mut classes = ClassList::new();
    classes
        .push(BUTTON_TRANSITION)
        .push(button_size_classes(size));

    let kind = if is_gradient_primary(variant, gradient) {
        for fragment in GRADIENT_CLASSES {
            classes.push(fragment);
        }
        ButtonKind::Default
    } else {
        if variant == ButtonVariant::Secondary {
            for fragment in SECONDARY_CLASSES {
                classes.push(fragment);
            }
        }
        passthrough_kind(variant)
    };

    StyleDescriptor::new(kind, classes)
}
