//! Shared painting helpers and the control and data-display primitives.

use leptos::html::{self, AnyElement, HtmlElement};
use leptos::*;
use soash_styles::{BadgeStyle, BadgeVariant, PerformanceLevel, TextElement, TypographyStyle};

mod controls;
mod data_display;

pub use controls::Button;
pub use data_display::{Badge, MetricCard, Typography};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Empty element for a text block; attributes are applied by [`paint_text`].
fn text_shell(element: TextElement) -> HtmlElement<AnyElement> {
    match element {
        TextElement::H1 => html::h1().into_any(),
        TextElement::H2 => html::h2().into_any(),
        TextElement::H3 => html::h3().into_any(),
        TextElement::H4 => html::h4().into_any(),
        TextElement::H5 => html::h5().into_any(),
        TextElement::H6 => html::h6().into_any(),
        TextElement::P => html::p().into_any(),
        TextElement::Span => html::span().into_any(),
        TextElement::Div => html::div().into_any(),
        TextElement::Label => html::label().into_any(),
    }
}

pub(crate) fn paint_text(
    style: &TypographyStyle,
    variant: &'static str,
    ui_slot: Option<&'static str>,
    content: impl IntoView,
) -> View {
    let mut element = text_shell(style.kind)
        .attr("class", style.class_attr())
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "typography")
        .attr("data-ui-variant", variant)
        .attr("data-ui-element", style.kind.token());
    if let Some(ui_slot) = ui_slot {
        element = element.attr("data-ui-slot", ui_slot);
    }
    element.child(content).into_view()
}

pub(crate) fn paint_badge(
    style: &BadgeStyle,
    variant: BadgeVariant,
    size: &'static str,
    content: impl IntoView,
) -> View {
    view! {
        <span
            class=style.class_attr()
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=style.kind.token()
            data-ui-tone=variant.token()
            data-ui-size=size
        >
            {content}
        </span>
    }
    .into_view()
}

/// A `performance` badge without a level renders as an unpainted outline badge. That is
/// supported, but usually means the caller forgot the level.
pub(crate) fn note_unpainted_performance(variant: BadgeVariant, level: Option<PerformanceLevel>) {
    if variant == BadgeVariant::Performance && level.is_none() {
        logging::debug_warn!("performance badge rendered without a performance level; palette omitted");
    }
}
