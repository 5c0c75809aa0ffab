use leptos::*;
use soash_styles::{
    assemble_metric_card, resolve_badge_style, BadgeVariant, FontWeight, IconSlot,
    MetricCardSpec, PerformanceLevel, Size, TextAlign, TextColor, TextElement, TypographyRequest,
    TypographyVariant,
};

use super::{bool_token, note_unpainted_performance, paint_badge, paint_text};

#[component]
/// Semantic badge primitive.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    /// Level for `performance` badges.
    #[prop(optional)]
    performance: Option<PerformanceLevel>,
    #[prop(default = Size::Default)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    note_unpainted_performance(variant, performance);
    let style = resolve_badge_style(variant, performance, size).with_extra(layout_class);
    paint_badge(&style, variant, size.token(), children())
}

#[component]
/// Typography primitive rendering the variant's default element unless `element` is given.
pub fn Typography(
    #[prop(default = TypographyVariant::Body)] variant: TypographyVariant,
    #[prop(optional)] element: Option<TextElement>,
    #[prop(default = TextColor::Default)] color: TextColor,
    #[prop(optional)] weight: Option<FontWeight>,
    #[prop(optional)] align: Option<TextAlign>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let request = TypographyRequest {
        variant,
        element,
        color,
        weight,
        align,
        extra: layout_class,
    };
    let style = request.resolve();
    paint_text(&style, variant.token(), ui_slot, children())
}

fn paint_icon(slot: IconSlot, render_icon: Option<Callback<IconSlot, View>>) -> View {
    let wrapper = slot.wrapper.merged();
    let icon = match render_icon {
        Some(render_icon) => render_icon.call(slot),
        None => view! {
            <span
                class=slot.classes.merged()
                aria-hidden="true"
                data-ui-kind="icon"
                data-ui-icon=slot.icon.as_str().to_string()
            ></span>
        }
        .into_view(),
    };
    view! {
        <div class=wrapper data-ui-slot="icon">
            {icon}
        </div>
    }
    .into_view()
}

#[component]
/// Metric summary card: icon, headline value, label, optional badge, and optional trend.
pub fn MetricCard(
    /// Card props.
    spec: MetricCardSpec,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Paints the icon from the host icon set. Without it the icon slot renders an
    /// `aria-hidden` span carrying `data-ui-icon` for icon-font or CSS mask styling.
    #[prop(optional)]
    render_icon: Option<Callback<IconSlot, View>>,
) -> impl IntoView {
    if let Some(badge) = spec.badge.as_ref() {
        note_unpainted_performance(badge.variant, badge.performance_level);
    }
    let layout = assemble_metric_card(&spec);
    let badge_variant = spec
        .badge
        .as_ref()
        .map(|badge| badge.variant)
        .unwrap_or_default();

    let icon = layout.icon.map(|slot| paint_icon(slot, render_icon));
    let value = paint_text(
        &layout.value.style,
        TypographyVariant::Heading1.token(),
        Some("value"),
        layout.value.text,
    );
    let label = paint_text(
        &layout.label.style,
        TypographyVariant::Body.token(),
        Some("label"),
        layout.label.text,
    );
    let badge = layout.badge.map(|slot| {
        view! {
            <div class=slot.wrapper.merged() data-ui-slot="badge">
                {paint_badge(&slot.style, badge_variant, slot.size.token(), slot.text)}
            </div>
        }
    });
    let trend = layout.trend.map(|slot| {
        view! {
            <div
                class=slot.wrapper.merged()
                data-ui-slot="trend"
                data-ui-direction=slot.direction.token()
            >
                {paint_text(&slot.value.style, TypographyVariant::Caption.token(), None, slot.value.text)}
                {paint_text(&slot.caption.style, TypographyVariant::Caption.token(), None, slot.caption.text)}
            </div>
        }
    });

    view! {
        <article
            class=layout.card.with_extra(layout_class).merged()
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot="metric-card"
            data-ui-size=spec.size.token()
            data-ui-hoverable=bool_token(spec.hoverable)
        >
            <div class=layout.content.merged() data-ui-slot="content">
                {icon}
                {value}
                {label}
                {badge}
                {trend}
            </div>
        </article>
    }
}
