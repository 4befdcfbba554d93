use super::*;

/// Runs `activate` unless the control is disabled; returns whether it ran.
pub fn activate_unless_disabled(disabled: bool, activate: impl FnOnce()) -> bool {
    if disabled {
        return false;
    }
    activate();
    true
}

#[component]
/// Shared button primitive with variant/size style lookups and native submit/reset semantics.
pub fn Button(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(into, default = MaybeSignal::Static(ButtonVariant::Primary))]
    variant: MaybeSignal<ButtonVariant>,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = ButtonKind::Button)] kind: ButtonKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_activate: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    let style = move || {
        let style = button_style(variant.get(), size);
        if full_width {
            format!("{style} width: 100%;")
        } else {
            style
        }
    };

    view! {
        <button
            type=kind.token()
            class=class
            style=style
            id=id
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=move || variant.get().token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_activate) = on_activate.as_ref() {
                    activate_unless_disabled(disabled.get_untracked(), || on_activate.call(ev));
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {move || label.get()}
        </button>
    }
}

#[component]
/// Labelled field wrapper.
pub fn FieldGroup(
    #[prop(into)] label: String,
    #[prop(optional, into)] field_id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            <label class="ui-field-label" for=field_id>{label}</label>
            {children()}
        </div>
    }
}

#[component]
/// Controlled single-line text input reporting the new value on every keystroke.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            autocomplete=autocomplete
            required=required
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Controlled multi-line text input.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-field ui-textarea", layout_class)
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            rows=rows
            required=required
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disabled_control_never_activates() {
        let calls = Cell::new(0);
        for _ in 0..3 {
            assert!(!activate_unless_disabled(true, || calls.set(calls.get() + 1)));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn enabled_control_activates_once_per_activation() {
        let calls = Cell::new(0);
        assert!(activate_unless_disabled(false, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);
        assert!(activate_unless_disabled(false, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn button_kinds_map_to_native_types() {
        assert_eq!(ButtonKind::default().token(), "button");
        assert_eq!(ButtonKind::Submit.token(), "submit");
        assert_eq!(ButtonKind::Reset.token(), "reset");
    }
}
