use super::*;

/// Open/closed state of the narrow-viewport navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureMenu {
    open: bool,
}

impl DisclosureMenu {
    /// Flips between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the menu is open.
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Closes the menu first, then runs the item's action if it has one.
pub fn close_and_activate(close: impl FnOnce(), action: Option<impl FnOnce()>) {
    close();
    if let Some(action) = action {
        action();
    }
}

/// Whether a nav item is the current one.
///
/// An explicit `is_active` flag wins even when it disagrees with the label match; otherwise the
/// label is compared case-insensitively with the active route name.
pub fn nav_item_is_current(is_active: Option<bool>, label: &str, active: &str) -> bool {
    is_active.unwrap_or_else(|| label.trim().eq_ignore_ascii_case(active.trim()))
}

/// One entry of the navbar link list.
#[derive(Clone)]
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Link target rendered as `href` so the entry stays a real link.
    pub href: Option<String>,
    /// Explicit current-state override.
    pub is_active: Option<bool>,
    /// Invoked after the menu closes.
    pub on_activate: Option<Callback<()>>,
}

impl NavItem {
    /// Builds an item that invokes `on_activate`.
    pub fn new(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            href: None,
            is_active: None,
            on_activate: Some(on_activate),
        }
    }

    /// Sets the link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Forces the current-state flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

#[component]
/// Site navigation bar: logo, link list, sign-in action, and a disclosure toggle for narrow
/// viewports.
pub fn Navbar(
    #[prop(into)] logo_label: String,
    #[prop(optional)] on_logo_activate: Option<Callback<()>>,
    items: Vec<NavItem>,
    #[prop(into)] active: MaybeSignal<String>,
    #[prop(optional)] on_sign_in: Option<Callback<()>>,
    #[prop(default = "Sign In")] sign_in_label: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let menu = create_rw_signal(DisclosureMenu::default());
    let active = Signal::derive(move || active.get());
    let close = move || menu.update(DisclosureMenu::close);

    let links = items
        .into_iter()
        .map(|item| {
            let NavItem {
                label,
                href,
                is_active,
                on_activate,
            } = item;
            let current_label = label.clone();
            let current =
                Signal::derive(move || nav_item_is_current(is_active, &current_label, &active.get()));
            view! {
                <li>
                    <a
                        class="ui-nav-link"
                        href=href
                        aria-current=move || current.get().then_some("page")
                        data-ui-selected=move || bool_token(current.get())
                        on:click=move |ev: MouseEvent| {
                            if on_activate.is_some() {
                                ev.prevent_default();
                            }
                            close_and_activate(close, on_activate.map(|cb| move || cb.call(())));
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class=merge_layout_class("ui-navbar", layout_class)
            aria-label="Main navigation"
            data-ui-primitive="true"
            data-ui-kind="navbar"
            data-ui-open=move || bool_token(menu.get().is_open())
        >
            <button
                type="button"
                class="ui-navbar-logo"
                on:click=move |_| {
                    close_and_activate(
                        close,
                        on_logo_activate.map(|cb| move || cb.call(())),
                    );
                }
            >
                {logo_label}
            </button>
            <button
                type="button"
                class="ui-navbar-toggle"
                aria-controls="ui-navbar-menu"
                aria-expanded=move || bool_token(menu.get().is_open())
                aria-label=move || {
                    if menu.get().is_open() { "Close menu" } else { "Open menu" }
                }
                on:click=move |_| menu.update(DisclosureMenu::toggle)
            >
                {move || {
                    let icon = if menu.get().is_open() { IconName::Dismiss } else { IconName::Menu };
                    view! { <Icon icon=icon size=IconSize::Lg /> }
                }}
            </button>
            <div id="ui-navbar-menu" class="ui-navbar-menu">
                <ul class="ui-navbar-links">{links}</ul>
                {on_sign_in.map(|on_sign_in| view! {
                    <Button
                        label=sign_in_label
                        size=ButtonSize::Small
                        layout_class="ui-navbar-sign-in"
                        on_activate=Callback::new(move |_| {
                            close_and_activate(close, Some(move || on_sign_in.call(())));
                        })
                    />
                })}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_closes_before_item_action_runs() {
        let mut menu = DisclosureMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        let log = RefCell::new(Vec::new());
        let menu = RefCell::new(menu);
        close_and_activate(
            || {
                menu.borrow_mut().close();
                log.borrow_mut().push("close");
            },
            Some(|| {
                assert!(!menu.borrow().is_open(), "menu still open when action ran");
                log.borrow_mut().push("action");
            }),
        );

        assert_eq!(*log.borrow(), vec!["close", "action"]);
        assert!(!menu.borrow().is_open());
    }

    #[test]
    fn item_without_action_still_closes_menu() {
        let mut menu = DisclosureMenu::default();
        menu.toggle();
        close_and_activate(|| menu.close(), None::<fn()>);
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut menu = DisclosureMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn label_match_is_case_insensitive() {
        assert!(nav_item_is_current(None, "Products", "products"));
        assert!(!nav_item_is_current(None, "About", "home"));
    }

    #[test]
    fn explicit_flag_wins_over_label_match() {
        assert!(!nav_item_is_current(Some(false), "Home", "home"));
        assert!(nav_item_is_current(Some(true), "Contact", "home"));
    }

    #[test]
    fn forced_inactive_item_is_not_current_on_its_own_route() {
        let item = NavItem {
            label: "Home".to_string(),
            href: None,
            is_active: None,
            on_activate: None,
        }
        .with_href("/")
        .with_active(false);

        assert_eq!(item.href.as_deref(), Some("/"));
        assert_eq!(item.is_active, Some(false));
        assert!(!nav_item_is_current(item.is_active, &item.label, "Home"));
    }
}
