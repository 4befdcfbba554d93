use super::*;

/// Heading color used when no override is supplied.
pub const DEFAULT_HEADING_COLOR: &str = "#1E293B";
const DEFAULT_PARAGRAPH_COLOR: &str = "#475569";

/// Inline style for a heading: the level lookup first, then the color, then any caller override.
///
/// Later declarations win in CSS, so the override can replace any part of the lookup.
pub fn heading_inline_style(level: HeadingLevel, color: Option<&str>, style: Option<&str>) -> String {
    let typography = level.style();
    let mut css = format!(
        "--ui-heading-size: {}px; --ui-heading-size-mobile: {}px; font-weight: {}; line-height: {}; color: {};",
        typography.desktop_px,
        typography.mobile_px,
        typography.weight,
        typography.line_height,
        color.filter(|color| !color.is_empty()).unwrap_or(DEFAULT_HEADING_COLOR),
    );
    append_override(&mut css, style);
    css
}

fn paragraph_inline_style(color: Option<&str>, style: Option<&str>) -> String {
    let mut css = format!(
        "color: {};",
        color.filter(|color| !color.is_empty()).unwrap_or(DEFAULT_PARAGRAPH_COLOR)
    );
    append_override(&mut css, style);
    css
}

fn append_override(css: &mut String, style: Option<&str>) {
    if let Some(style) = style.map(str::trim).filter(|style| !style.is_empty()) {
        css.push(' ');
        css.push_str(style);
    }
}

#[component]
/// Semantic heading; `level` outside `1..=6` renders as `<h1>`.
pub fn Heading(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(default = 1)] level: u8,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let level = HeadingLevel::from_level(level);
    let class = merge_layout_class("ui-heading", layout_class);
    let inline_style = heading_inline_style(level, color.as_deref(), style.as_deref());
    let text = move || text.get();

    match level {
        HeadingLevel::H1 => view! {
            <h1 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h1>
        }
        .into_view(),
        HeadingLevel::H2 => view! {
            <h2 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h3>
        }
        .into_view(),
        HeadingLevel::H4 => view! {
            <h4 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h4>
        }
        .into_view(),
        HeadingLevel::H5 => view! {
            <h5 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h5>
        }
        .into_view(),
        HeadingLevel::H6 => view! {
            <h6 class=class style=inline_style data-ui-primitive="true" data-ui-kind="heading"
                data-ui-slot=ui_slot data-ui-level=level.tag()>{text}</h6>
        }
        .into_view(),
    }
}

#[component]
/// Body text rendered as a paragraph, inline span, or container.
pub fn Paragraph(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(default = ParagraphElement::Block)] element: ParagraphElement,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let class = merge_layout_class("ui-text", layout_class);
    let inline_style = paragraph_inline_style(color.as_deref(), style.as_deref());
    let text = move || text.get();

    match element {
        ParagraphElement::Block => view! {
            <p class=class style=inline_style data-ui-primitive="true" data-ui-kind="text"
                data-ui-slot=ui_slot data-ui-variant=element.tag()>{text}</p>
        }
        .into_view(),
        ParagraphElement::Inline => view! {
            <span class=class style=inline_style data-ui-primitive="true" data-ui-kind="text"
                data-ui-slot=ui_slot data-ui-variant=element.tag()>{text}</span>
        }
        .into_view(),
        ParagraphElement::Container => view! {
            <div class=class style=inline_style data-ui-primitive="true" data-ui-kind="text"
                data-ui-slot=ui_slot data-ui-variant=element.tag()>{text}</div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_style_uses_level_lookup_and_default_color() {
        assert_eq!(
            heading_inline_style(HeadingLevel::H2, None, None),
            "--ui-heading-size: 36px; --ui-heading-size-mobile: 28px; font-weight: 700; line-height: 1.2; color: #1E293B;"
        );
    }

    #[test]
    fn heading_overrides_follow_the_lookup() {
        let css = heading_inline_style(HeadingLevel::H3, Some("#FFFFFF"), Some("margin: 0;"));
        assert!(css.contains("color: #FFFFFF;"));
        assert!(css.ends_with("margin: 0;"));
        assert!(!css.contains(DEFAULT_HEADING_COLOR));
    }

    #[test]
    fn invalid_level_renders_h1_styling() {
        let fallback = heading_inline_style(HeadingLevel::from_level(0), None, None);
        let h1 = heading_inline_style(HeadingLevel::H1, None, None);
        assert_eq!(fallback, h1);
        assert!(fallback.starts_with("--ui-heading-size: 48px;"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        assert_eq!(
            paragraph_inline_style(Some(""), Some("   ")),
            "color: #475569;"
        );
    }
}
