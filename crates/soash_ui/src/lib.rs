//! Leptos primitives for the Soash dashboard design system.
//!
//! Components here only paint: every style decision is made by the `soash_styles` resolvers,
//! and each component writes the resolved classes plus the stable `data-ui-*` DOM contract
//! (`data-ui-kind`, `data-ui-variant`, `data-ui-size`) consumed by the dashboard CSS layers.
//! Pages should compose these primitives instead of emitting ad hoc utility classes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{Badge, Button, MetricCard, Typography};
pub use soash_styles::{
    BadgeVariant, ButtonSize, ButtonVariant, FontWeight, IconRef, IconSlot, MetricBadge,
    MetricCardSpec, MetricTrend, PerformanceLevel, Size, TextAlign, TextColor, TextElement,
    TrendDirection, TypographyVariant,
};

/// Convenience imports for page crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, FontWeight, IconRef, IconSlot,
        MetricBadge, MetricCard, MetricCardSpec, MetricTrend, PerformanceLevel, Size, TextAlign,
        TextColor, TextElement, TrendDirection, Typography, TypographyVariant,
    };
}
