use super::*;

/// Call-to-action button shown in a hero banner.
#[derive(Clone)]
pub struct HeroAction {
    /// Button label.
    pub label: String,
    /// Invoked on activation.
    pub on_activate: Callback<()>,
}

impl HeroAction {
    /// Builds a hero action.
    pub fn new(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_activate,
        }
    }

    fn render(self, variant: ButtonVariant) -> View {
        let on_activate = self.on_activate;
        view! {
            <Button
                label=self.label
                variant=variant
                size=ButtonSize::Large
                on_activate=Callback::new(move |_| on_activate.call(()))
            />
        }
        .into_view()
    }
}

fn hero_background(image: Option<&str>) -> Option<String> {
    image
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .map(|image| {
            format!(
                "background-image: linear-gradient(rgba(15, 23, 42, 0.55), rgba(15, 23, 42, 0.55)), url('{image}');"
            )
        })
}

#[component]
/// Full-width banner with a headline, subtitle, and up to two calls to action.
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] background_image: Option<String>,
    #[prop(optional)] primary_action: Option<HeroAction>,
    #[prop(optional)] secondary_action: Option<HeroAction>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let background_image = background_image.filter(|image| !image.trim().is_empty());
    let has_background = background_image.is_some();
    let text_color = has_background.then_some("#FFFFFF".to_string());

    view! {
        <section
            class=merge_layout_class("ui-hero", layout_class)
            style=hero_background(background_image.as_deref())
            data-ui-primitive="true"
            data-ui-kind="hero"
            data-ui-tone={if has_background { "inverse" } else { "default" }}
        >
            <div class="ui-hero-content">
                {match text_color.clone() {
                    Some(color) => view! { <Heading text=title level=1 color=color /> }.into_view(),
                    None => view! { <Heading text=title level=1 /> }.into_view(),
                }}
                {subtitle.map(|subtitle| match text_color {
                    Some(color) => view! {
                        <Paragraph text=subtitle color=color layout_class="ui-hero-subtitle" />
                    }
                    .into_view(),
                    None => view! { <Paragraph text=subtitle layout_class="ui-hero-subtitle" /> }
                        .into_view(),
                })}
                <div class="ui-hero-actions">
                    {primary_action.map(|action| action.render(ButtonVariant::Primary))}
                    {secondary_action.map(|action| action.render(ButtonVariant::Secondary))}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_only_set_for_real_images() {
        assert!(hero_background(None).is_none());
        assert!(hero_background(Some("  ")).is_none());
        let css = hero_background(Some("/hero.jpg")).unwrap_or_default();
        assert!(css.contains("url('/hero.jpg')"));
    }
}
