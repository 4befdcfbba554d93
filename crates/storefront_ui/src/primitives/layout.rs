use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-gap=gap.token()
            data-ui-align=align.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-gap=gap.token()
            data-ui-align=align.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive card grid; `columns` caps the column count on wide viewports.
pub fn Grid(
    #[prop(default = 3)] columns: u8,
    #[prop(default = LayoutGap::Lg)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            style=format!("--ui-grid-columns: {};", columns.clamp(1, 6))
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Page section with an optional centered heading and lead paragraph.
pub fn Section(
    #[prop(optional, into)] heading: Option<String>,
    #[prop(optional, into)] lead: Option<String>,
    #[prop(optional)] muted: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="section"
            data-ui-tone={if muted { "muted" } else { "default" }}
        >
            {heading.map(|heading| view! {
                <Heading text=heading level=2 layout_class="ui-section-heading" />
            })}
            {lead.map(|lead| view! { <Paragraph text=lead layout_class="ui-section-lead" /> })}
            {children()}
        </section>
    }
}

#[component]
/// Explicit empty-result message.
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Xl /> })}
            <Paragraph text=message />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_tokens_are_stable() {
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutAlign::Center.token(), "center");
    }
}
