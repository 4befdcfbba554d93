use super::*;

/// What a card shows in its media region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMedia {
    /// The supplied image.
    Image,
    /// Placeholder glyph shown after the image failed to load.
    Placeholder,
    /// Icon shown when no image was supplied.
    Icon(IconName),
    /// No media region.
    Empty,
}

/// Resolves the media region. An image always wins over an icon; a failed image never falls
/// back to the icon.
pub fn resolve_card_media(
    image: Option<&str>,
    icon: Option<IconName>,
    image_failed: bool,
) -> CardMedia {
    match (image.filter(|src| !src.trim().is_empty()), icon) {
        (Some(_), _) if image_failed => CardMedia::Placeholder,
        (Some(_), _) => CardMedia::Image,
        (None, Some(icon)) => CardMedia::Icon(icon),
        (None, None) => CardMedia::Empty,
    }
}

/// Keys that activate a focusable card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Whether a keydown should activate a focusable card. Keys pressed inside a nested control
/// (swatch, action button) report that control as the target and never activate the card.
pub fn card_key_activates<T: PartialEq>(
    target: Option<&T>,
    card: Option<&T>,
    key: &str,
) -> bool {
    matches!((target, card), (Some(target), Some(card)) if target == card)
        && is_activation_key(key)
}

fn swatch_is_selected(color: &str, selected: Option<&str>) -> bool {
    selected == Some(color)
}

/// Visible swatch text. Catalog color names are not CSS colors, so the name is the label.
fn swatch_label(color: &str) -> &str {
    color.trim()
}

/// Button shown in a card's action row.
#[derive(Clone)]
pub struct CardAction {
    /// Button label.
    pub label: String,
    /// Button treatment.
    pub variant: ButtonVariant,
    /// Invoked when the button is activated.
    pub on_activate: Callback<()>,
}

impl CardAction {
    /// Builds a primary action.
    pub fn primary(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            on_activate,
        }
    }

    /// Builds a secondary action.
    pub fn secondary(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Secondary,
            on_activate,
        }
    }

    fn render(self) -> View {
        let on_activate = self.on_activate;
        view! {
            <Button
                label=self.label
                variant=self.variant
                size=ButtonSize::Small
                on_activate=Callback::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_activate.call(());
                })
            />
        }
        .into_view()
    }
}

#[component]
/// Product/feature card with media, price header, color swatches, and up to two actions.
///
/// With `on_activate` the whole card is focusable and Enter/Space activate it. Swatch and action
/// clicks do not bubble into card activation.
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] price: Option<String>,
    #[prop(optional, into)] image: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] colors: Vec<String>,
    #[prop(optional, into)] selected_color: MaybeSignal<Option<String>>,
    #[prop(optional)] on_color_select: Option<Callback<String>>,
    #[prop(optional)] primary_action: Option<CardAction>,
    #[prop(optional)] secondary_action: Option<CardAction>,
    #[prop(default = CardOrientation::Vertical)] orientation: CardOrientation,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let image_failed = create_rw_signal(false);
    let selected_color = Signal::derive(move || selected_color.get());
    let activatable = on_activate.is_some();
    let alt = title.clone();

    let media = move || {
        match resolve_card_media(image.as_deref(), icon, image_failed.get()) {
            CardMedia::Image => {
                let src = image.clone().unwrap_or_default();
                view! {
                    <div class="ui-card-media" data-ui-slot="media">
                        <img
                            src=src
                            alt=alt.clone()
                            loading="lazy"
                            on:error=move |_| image_failed.set(true)
                        />
                    </div>
                }
                .into_view()
            }
            CardMedia::Placeholder => view! {
                <div class="ui-card-media" data-ui-slot="media" data-ui-state="placeholder">
                    <Icon icon=IconName::Photo size=IconSize::Xl />
                </div>
            }
            .into_view(),
            CardMedia::Icon(icon) => view! {
                <div class="ui-card-icon" data-ui-slot="icon">
                    <Icon icon=icon size=IconSize::Xl />
                </div>
            }
            .into_view(),
            CardMedia::Empty => View::default(),
        }
    };

    let swatches = (!colors.is_empty()).then(|| {
        view! {
            <div class="ui-card-swatches" role="group" aria-label="Available colors">
                <span class="ui-card-swatches-label">"Available Colors:"</span>
                {colors
                    .into_iter()
                    .map(|color| {
                        let pressed_color = color.clone();
                        let selected = Signal::derive(move || {
                            swatch_is_selected(&pressed_color, selected_color.get().as_deref())
                        });
                        let reported = color.clone();
                        view! {
                            <button
                                type="button"
                                class="ui-card-swatch"
                                aria-pressed=move || bool_token(selected.get())
                                data-ui-selected=move || bool_token(selected.get())
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    if let Some(on_color_select) = on_color_select.as_ref() {
                                        on_color_select.call(reported.clone());
                                    }
                                }
                            >
                                {swatch_label(&color).to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let actions = (primary_action.is_some() || secondary_action.is_some()).then(|| {
        view! {
            <div class="ui-card-actions">
                {primary_action.map(CardAction::render)}
                {secondary_action.map(CardAction::render)}
            </div>
        }
    });

    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            role=activatable.then_some("button")
            tabindex=activatable.then_some(0)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-orientation=orientation.token()
            data-ui-interactive=bool_token(activatable)
            on:click=move |_| {
                if let Some(on_activate) = on_activate.as_ref() {
                    on_activate.call(());
                }
            }
            on:keydown:undelegated=move |ev: KeyboardEvent| {
                let Some(on_activate) = on_activate.as_ref() else {
                    return;
                };
                if !card_key_activates(
                    ev.target().as_ref(),
                    ev.current_target().as_ref(),
                    &ev.key(),
                ) {
                    return;
                }
                ev.prevent_default();
                on_activate.call(());
            }
        >
            {media}
            <div class="ui-card-body">
                <div class="ui-card-header">
                    <Heading text=title level=3 layout_class="ui-card-title" />
                    {price.map(|price| view! { <span class="ui-card-price">{price}</span> })}
                </div>
                {description.map(|description| view! {
                    <Paragraph text=description layout_class="ui-card-description" />
                })}
                {swatches}
                {actions}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn image_takes_precedence_over_icon() {
        assert_eq!(
            resolve_card_media(Some("/shoe.jpg"), Some(IconName::Heart), false),
            CardMedia::Image
        );
        assert_eq!(
            resolve_card_media(None, Some(IconName::Heart), false),
            CardMedia::Icon(IconName::Heart)
        );
        assert_eq!(resolve_card_media(None, None, false), CardMedia::Empty);
    }

    #[test]
    fn blank_image_counts_as_absent() {
        assert_eq!(
            resolve_card_media(Some("  "), Some(IconName::Bolt), false),
            CardMedia::Icon(IconName::Bolt)
        );
    }

    #[test]
    fn failed_image_shows_placeholder_not_icon() {
        assert_eq!(
            resolve_card_media(Some("/broken.jpg"), Some(IconName::Heart), true),
            CardMedia::Placeholder
        );
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        for key in ["Tab", "Escape", "a", "Spacebar", "ArrowDown"] {
            assert!(!is_activation_key(key), "{key} should not activate");
        }
    }

    #[test]
    fn exactly_the_selected_swatch_is_pressed() {
        let colors = ["Black", "White", "Red"];
        let pressed: Vec<bool> = colors
            .iter()
            .map(|color| swatch_is_selected(color, Some("White")))
            .collect();
        assert_eq!(pressed, vec![false, true, false]);
        assert!(!swatch_is_selected("Black", None));
    }

    #[test]
    fn keys_on_the_card_itself_activate_it() {
        let card = "article";
        assert!(card_key_activates(Some(&card), Some(&card), "Enter"));
        assert!(card_key_activates(Some(&card), Some(&card), " "));
        assert!(!card_key_activates(Some(&card), Some(&card), "Tab"));
    }

    #[test]
    fn keys_inside_nested_controls_do_not_activate_the_card() {
        let card = "article";
        let swatch = "swatch";
        assert!(!card_key_activates(Some(&swatch), Some(&card), "Enter"));
        assert!(!card_key_activates(Some(&swatch), Some(&card), " "));
        assert!(!card_key_activates(None, Some(&card), "Enter"));
        assert!(!card_key_activates(Some(&card), None, "Enter"));
    }

    #[test]
    fn swatches_show_distinct_color_names() {
        let colors = ["Platinum", "Gold", "Rose Gold", "Dark Brown"];
        let labels: Vec<&str> = colors.iter().map(|color| swatch_label(color)).collect();
        assert_eq!(labels, vec!["Platinum", "Gold", "Rose Gold", "Dark Brown"]);
        assert_eq!(swatch_label(" Navy "), "Navy");
    }
}
