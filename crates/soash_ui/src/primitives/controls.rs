use leptos::ev::MouseEvent;
use leptos::*;
use soash_styles::{is_gradient_primary, resolve_button_style, ButtonSize, ButtonVariant};

use super::bool_token;

#[component]
/// Shared button primitive. `primary` (or `gradient`) paints the gradient call-to-action.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional)] gradient: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = resolve_button_style(variant, gradient, size).with_extra(layout_class);
    view! {
        <button
            type="button"
            class=style.class_attr()
            id=id
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=style.kind.token()
            data-ui-size=size.token()
            data-ui-gradient=bool_token(is_gradient_primary(variant, gradient))
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
