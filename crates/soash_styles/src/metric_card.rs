//! Metric card assembly.
//!
//! A [`MetricCardSpec`] is built (or deserialized) fresh for each render and assembled into a
//! [`MetricCardLayout`]: a fixed tree of resolved descriptors the rendering layer paints top to
//! bottom. The card delegates its value, label, and trend text to the typography resolver and
//! its badge to the badge resolver.

use serde::{Deserialize, Deserializer, Serialize};

use crate::badge::{resolve_badge_style, BadgeStyle};
use crate::class_list::ClassList;
use crate::tables::{metric_card_padding_classes, metric_icon_size_classes, metric_value_size_classes};
use crate::tokens::{BadgeVariant, PerformanceLevel, Size, TrendDirection, TypographyVariant};
use crate::typography::{resolve_typography_style, TypographyStyle};

/// Caption printed after every trend value.
pub const TREND_CAPTION: &str = "vs. last week";

/// Badge size inside a metric card, whatever the card's own size.
pub const METRIC_BADGE_SIZE: Size = Size::Sm;

const CARD_BASE: &str = "transition-all duration-200";
const CARD_HOVER: &str = "hover:shadow-lg hover:-translate-y-0.5 cursor-pointer";
const CONTENT_BASE: &str = "text-center space-y-3";
const CENTERED_ROW: &str = "flex justify-center";
const ICON_BASE: &str = "text-gray-600";
const VALUE_EXTRA: &str = "font-bold text-gray-900";
const LABEL_EXTRA: &str = "text-gray-600";
const TREND_ROW: &str = "flex justify-center items-center space-x-1";
const TREND_VALUE_EXTRA: &str = "font-semibold";
const TREND_CAPTION_EXTRA: &str = "text-gray-500";

/// Name of an icon in the host icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Creates an icon reference from trusted caller input.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the icon name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Badge shown under a metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricBadge {
    /// Badge text.
    pub text: String,
    /// Badge variant.
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Level for `performance` badges.
    #[serde(default, alias = "performance", skip_serializing_if = "Option::is_none")]
    pub performance_level: Option<PerformanceLevel>,
}

impl MetricBadge {
    /// Badge with `text` and `variant` and no performance level.
    pub fn new(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            variant,
            performance_level: None,
        }
    }

    /// `performance` badge colored by `level`.
    pub fn performance(text: impl Into<String>, level: PerformanceLevel) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Performance,
            performance_level: Some(level),
        }
    }
}

/// Trend indicator shown at the bottom of a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTrend {
    /// Change text such as `+23%`.
    pub value: String,
    /// Direction of the change.
    pub direction: TrendDirection,
}

impl MetricTrend {
    /// Trend with `value` moving in `direction`.
    pub fn new(value: impl Into<String>, direction: TrendDirection) -> Self {
        Self {
            value: value.into(),
            direction,
        }
    }
}

fn default_hoverable() -> bool {
    true
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => text,
        RawValue::Number(number) => number.to_string(),
    })
}

/// Props of one metric card.
///
/// Only `value` and `label` are required; when deserialized, `size` defaults to
/// [`Size::Default`] and `hoverable` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCardSpec {
    /// Icon shown above the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Headline value. JSON numbers are accepted and kept in their textual form.
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    /// Metric description.
    pub label: String,
    /// Optional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<MetricBadge>,
    /// Optional trend indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<MetricTrend>,
    /// Card size.
    #[serde(default)]
    pub size: Size,
    /// Whether the card lifts on hover.
    #[serde(default = "default_hoverable")]
    pub hoverable: bool,
    /// Caller classes appended to the card root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl MetricCardSpec {
    /// Default-sized, hoverable card with only a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: None,
            value: value.into(),
            label: label.into(),
            badge: None,
            trend: None,
            size: Size::Default,
            hoverable: true,
            class: None,
        }
    }

    /// Parses card props from JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] raised for malformed JSON, missing `value`/`label`, or
    /// unknown token names.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the badge.
    pub fn badge(mut self, badge: MetricBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Sets the trend.
    pub fn trend(mut self, trend: MetricTrend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Sets the card size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Enables or disables hover lift.
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Appends caller classes to the card root.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// A run of text with its resolved typography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    /// Text content.
    pub text: String,
    /// Resolved element and classes.
    pub style: TypographyStyle,
}

/// Icon row of a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSlot {
    /// Icon to paint.
    pub icon: IconRef,
    /// Row classes.
    pub wrapper: ClassList,
    /// Classes for the icon itself.
    pub classes: ClassList,
}

/// Badge row of a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSlot {
    /// Badge text.
    pub text: String,
    /// Row classes.
    pub wrapper: ClassList,
    /// Size the badge was resolved at.
    pub size: Size,
    /// Resolved badge style.
    pub style: BadgeStyle,
}

/// Trend row of a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSlot {
    /// Direction the glyph and color were chosen for.
    pub direction: TrendDirection,
    /// Row classes.
    pub wrapper: ClassList,
    /// Glyph followed by the trend value.
    pub value: TextBlock,
    /// Fixed comparison caption.
    pub caption: TextBlock,
}

/// Resolved render tree of a metric card, painted top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCardLayout {
    /// Card root classes.
    pub card: ClassList,
    /// Card content classes.
    pub content: ClassList,
    /// Icon row.
    pub icon: Option<IconSlot>,
    /// Headline value.
    pub value: TextBlock,
    /// Metric label.
    pub label: TextBlock,
    /// Badge row.
    pub badge: Option<BadgeSlot>,
    /// Trend row.
    pub trend: Option<TrendSlot>,
}

/// Arrow glyph for a trend direction.
pub fn trend_glyph(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "↗",
        TrendDirection::Down => "↘",
        TrendDirection::Neutral => "→",
    }
}

/// Text color class for a trend direction.
pub fn trend_color_class(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "text-green-600",
        TrendDirection::Down => "text-red-600",
        TrendDirection::Neutral => "text-gray-600",
    }
}

fn text_block(variant: TypographyVariant, text: impl Into<String>, extra: &[&str]) -> TextBlock {
    let mut style = resolve_typography_style(variant);
    for fragment in extra {
        style.classes.push(fragment);
    }
    TextBlock {
        text: text.into(),
        style,
    }
}

/// Assembles the render tree for one metric card.
pub fn assemble_metric_card(spec: &MetricCardSpec) -> MetricCardLayout {
    let size = spec.size;

    let mut card = ClassList::new();
    card.push(CARD_BASE).push_if(spec.hoverable, CARD_HOVER);
    let card = card.with_extra(spec.class.as_deref());

    let content = ClassList::from(CONTENT_BASE).with(metric_card_padding_classes(size));

    let icon = spec.icon.as_ref().map(|icon| IconSlot {
        icon: icon.clone(),
        wrapper: ClassList::from(CENTERED_ROW),
        classes: ClassList::from(ICON_BASE).with(metric_icon_size_classes(size)),
    });

    let value = text_block(
        TypographyVariant::Heading1,
        spec.value.as_str(),
        &[VALUE_EXTRA, metric_value_size_classes(size)],
    );
    let label = text_block(TypographyVariant::Body, spec.label.as_str(), &[LABEL_EXTRA]);

    let badge = spec.badge.as_ref().map(|badge| BadgeSlot {
        text: badge.text.clone(),
        wrapper: ClassList::from(CENTERED_ROW),
        size: METRIC_BADGE_SIZE,
        style: resolve_badge_style(badge.variant, badge.performance_level, METRIC_BADGE_SIZE),
    });

    let trend = spec.trend.as_ref().map(|trend| TrendSlot {
        direction: trend.direction,
        wrapper: ClassList::from(TREND_ROW),
        value: text_block(
            TypographyVariant::Caption,
            format!("{}{}", trend_glyph(trend.direction), trend.value),
            &[TREND_VALUE_EXTRA, trend_color_class(trend.direction)],
        ),
        caption: text_block(TypographyVariant::Caption, TREND_CAPTION, &[TREND_CAPTION_EXTRA]),
    });

    MetricCardLayout {
        card,
        content,
        icon,
        value,
        label,
        badge,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::badge::Palette;
    use crate::tokens::{BadgeKind, StyleToken, TextElement};

    #[test]
    fn size_drives_padding_value_and_icon_tables() {
        let spec = MetricCardSpec::new("524", "Comments")
            .icon(IconRef::new("message-circle"))
            .size(Size::Lg);
        let layout = assemble_metric_card(&spec);

        assert_eq!(layout.content.merged(), "text-center space-y-3 p-8");
        assert_eq!(
            layout.icon.expect("icon slot").classes.to_class_string(),
            "text-gray-600 w-8 h-8"
        );
        assert_eq!(layout.value.style.class_attr(), "font-bold text-gray-900 text-3xl");
    }

    #[test]
    fn badge_is_always_small() {
        for size in Size::ALL {
            let spec = MetricCardSpec::new("156", "Shares")
                .badge(MetricBadge::performance("Medium Performance", PerformanceLevel::Medium))
                .size(*size);
            let badge = assemble_metric_card(&spec).badge.expect("badge slot");

            assert_eq!(badge.size, Size::Sm);
            assert_eq!(
                badge.style,
                resolve_badge_style(BadgeVariant::Performance, Some(PerformanceLevel::Medium), Size::Sm)
            );
        }
    }

    #[test]
    fn optional_rows_are_absent_without_props() {
        let layout = assemble_metric_card(&MetricCardSpec::new("12.5K", "Reach"));

        assert_eq!(layout.icon, None);
        assert_eq!(layout.badge, None);
        assert_eq!(layout.trend, None);
        assert_eq!(layout.value.style.kind, TextElement::H1);
        assert_eq!(layout.label.style.kind, TextElement::P);
    }

    #[test]
    fn trend_glyph_and_color_follow_direction() {
        let cases = [
            (TrendDirection::Up, "↗-5%", "text-green-600"),
            (TrendDirection::Down, "↘-5%", "text-red-600"),
            (TrendDirection::Neutral, "→-5%", "text-gray-600"),
        ];
        for (direction, text, color) in cases {
            let spec = MetricCardSpec::new("1", "x").trend(MetricTrend::new("-5%", direction));
            let trend = assemble_metric_card(&spec).trend.expect("trend slot");

            assert_eq!(trend.value.text, text);
            assert_eq!(trend.value.style.kind, TextElement::Span);
            assert_eq!(trend.value.style.class_attr(), format!("text-xs font-semibold {color}"));
            assert_eq!(trend.caption.text, TREND_CAPTION);
            assert_eq!(trend.caption.style.class_attr(), "text-xs text-gray-500");
        }
    }

    #[test]
    fn hoverable_only_toggles_card_lift() {
        let lifted = assemble_metric_card(&MetricCardSpec::new("1", "x"));
        let flat = assemble_metric_card(&MetricCardSpec::new("1", "x").hoverable(false));

        assert!(lifted.card.contains("cursor-pointer"));
        assert_eq!(flat.card.to_class_string(), "transition-all duration-200");
        assert_eq!(lifted.content, flat.content);
        assert_eq!(lifted.value, flat.value);
    }

    #[test]
    fn caller_class_lands_last_on_card_root() {
        let layout = assemble_metric_card(&MetricCardSpec::new("1", "x").class("duration-300"));
        assert_eq!(
            layout.card.merged(),
            "transition-all hover:shadow-lg hover:-translate-y-0.5 cursor-pointer duration-300"
        );
    }

    #[test]
    fn deserializes_with_defaults_and_numeric_value() {
        let spec: MetricCardSpec = serde_json::from_value(json!({
            "value": 4.2,
            "label": "Engagement Rate",
            "badge": { "text": "Low Performance", "variant": "performance", "performance": "low" },
            "trend": { "value": "-12%", "direction": "down" }
        }))
        .expect("deserialize card");

        assert_eq!(spec.value, "4.2");
        assert_eq!(spec.size, Size::Default);
        assert!(spec.hoverable);

        let badge = assemble_metric_card(&spec).badge.expect("badge slot");
        assert_eq!(badge.style.kind, BadgeKind::Outline);
        assert!(badge.style.classes.contains(Palette::RED.text));
    }

    #[test]
    fn badge_variant_defaults_to_plain_badge() {
        let spec = MetricCardSpec::from_json(
            r#"{ "value": "1,204", "label": "Followers", "badge": { "text": "New" }, "size": "sm" }"#,
        )
        .expect("parse card");

        assert_eq!(spec.size, Size::Sm);
        let badge = assemble_metric_card(&spec).badge.expect("badge slot");
        assert_eq!(badge.style.kind, BadgeKind::Default);
    }

    #[test]
    fn rejects_unknown_tokens_and_missing_label() {
        assert!(MetricCardSpec::from_json(r#"{ "value": "1", "label": "x", "size": "xl" }"#).is_err());
        assert!(MetricCardSpec::from_json(r#"{ "value": "1" }"#).is_err());
    }
}
