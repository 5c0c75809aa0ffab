//! Variant resolution for the Soash dashboard design system.
//!
//! This crate is intentionally renderer-agnostic. It maps semantic style inputs (variant,
//! performance level, size, color, weight, alignment) to [`StyleDescriptor`]s: the underlying
//! primitive configuration plus an ordered [`ClassList`] of utility classes. Every resolver is a
//! total, pure function over closed enums; the only fallible surface is parsing tokens and card
//! props from strings or JSON.
//!
//! Class lists are composed base → size → semantic → overrides → caller classes, and
//! [`ClassList::merged`] applies the last-wins conflict rule the rendering layer relies on.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod badge;
mod button;
mod class_list;
mod class_merge;
mod metric_card;
pub mod tables;
mod tokens;
mod typography;

pub use badge::{badge_kind, badge_palette, resolve_badge_style, BadgeStyle, Palette};
pub use button::{is_gradient_primary, resolve_button_style, ButtonStyle};
pub use class_list::{ClassList, StyleDescriptor};
pub use class_merge::merge_classes;
pub use metric_card::{
    assemble_metric_card, trend_color_class, trend_glyph, BadgeSlot, IconRef, IconSlot,
    MetricBadge, MetricCardLayout, MetricCardSpec, MetricTrend, TextBlock, TrendSlot,
    METRIC_BADGE_SIZE, TREND_CAPTION,
};
pub use tokens::{
    parse_token, BadgeKind, BadgeVariant, ButtonKind, ButtonSize, ButtonVariant, FontWeight,
    PerformanceLevel, Size, StyleToken, TextAlign, TextColor, TextElement, TokenParseError,
    TrendDirection, TypographyVariant,
};
pub use typography::{resolve_typography_style, TypographyRequest, TypographyStyle};
