use super::*;

/// Local newsletter input draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterDraft {
    email: String,
}

impl NewsletterDraft {
    /// Replaces the draft with the latest input value.
    pub fn set(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Current draft text, untrimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submits the draft.
    ///
    /// A blank draft is a no-op. Otherwise `signup` receives the trimmed address and the draft is
    /// cleared afterwards. Returns whether `signup` ran.
    pub fn submit(&mut self, signup: impl FnOnce(String)) -> bool {
        let trimmed = self.email.trim();
        if trimmed.is_empty() {
            return false;
        }
        signup(trimmed.to_string());
        self.email.clear();
        true
    }
}

/// How a footer entry reacts to activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBehavior {
    /// Invokes the entry's callback.
    Act,
    /// Follows the entry's `href`.
    Navigate,
    /// Renders as plain text.
    Inert,
}

/// An action callback wins over an `href`; an entry with neither is inert.
pub fn resolve_link_behavior(href: Option<&str>, has_action: bool) -> LinkBehavior {
    if has_action {
        LinkBehavior::Act
    } else if href.is_some_and(|href| !href.trim().is_empty()) {
        LinkBehavior::Navigate
    } else {
        LinkBehavior::Inert
    }
}

/// A labelled footer link.
#[derive(Clone)]
pub struct FooterLink {
    /// Visible label.
    pub label: String,
    /// Navigable target.
    pub href: Option<String>,
    /// Action invoked instead of navigation.
    pub on_activate: Option<Callback<()>>,
}

impl FooterLink {
    /// Builds a link that navigates to `href`.
    pub fn href(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            on_activate: None,
        }
    }

    /// Builds a link that invokes `on_activate`.
    pub fn action(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            href: None,
            on_activate: Some(on_activate),
        }
    }

    fn render(self) -> View {
        let Self {
            label,
            href,
            on_activate,
        } = self;
        match resolve_link_behavior(href.as_deref(), on_activate.is_some()) {
            LinkBehavior::Act => view! {
                <a
                    class="ui-footer-link"
                    href=href.unwrap_or_else(|| "#".to_string())
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        if let Some(on_activate) = on_activate.as_ref() {
                            on_activate.call(());
                        }
                    }
                >
                    {label}
                </a>
            }
            .into_view(),
            LinkBehavior::Navigate => view! {
                <a class="ui-footer-link" href=href>{label}</a>
            }
            .into_view(),
            LinkBehavior::Inert => view! {
                <span class="ui-footer-link" data-ui-state="inert">{label}</span>
            }
            .into_view(),
        }
    }
}

/// Titled group of footer links.
#[derive(Clone)]
pub struct FooterLinkSection {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    pub links: Vec<FooterLink>,
}

/// Social network entry with an icon.
#[derive(Clone)]
pub struct SocialLink {
    /// Network name, used as the accessible label.
    pub name: String,
    /// Profile URL.
    pub href: Option<String>,
    /// Network icon.
    pub icon: IconName,
    /// Action invoked instead of navigation.
    pub on_activate: Option<Callback<()>>,
}

impl SocialLink {
    fn render(self) -> View {
        let Self {
            name,
            href,
            icon,
            on_activate,
        } = self;
        match resolve_link_behavior(href.as_deref(), on_activate.is_some()) {
            LinkBehavior::Act => view! {
                <button
                    type="button"
                    class="ui-footer-social"
                    aria-label=name
                    on:click=move |_| {
                        if let Some(on_activate) = on_activate.as_ref() {
                            on_activate.call(());
                        }
                    }
                >
                    <Icon icon=icon size=IconSize::Md />
                </button>
            }
            .into_view(),
            LinkBehavior::Navigate => view! {
                <a
                    class="ui-footer-social"
                    href=href
                    aria-label=format!("Follow us on {name}")
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <Icon icon=icon size=IconSize::Md />
                </a>
            }
            .into_view(),
            LinkBehavior::Inert => view! {
                <span class="ui-footer-social" aria-label=name data-ui-state="inert">
                    <Icon icon=icon size=IconSize::Md />
                </span>
            }
            .into_view(),
        }
    }
}

/// Company contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    /// Contact mailbox.
    pub email: Option<String>,
    /// Contact phone number as displayed.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

impl ContactInfo {
    /// Whether no detail is present.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

fn tel_href(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    format!("tel:{dialable}")
}

fn copyright_line(year: u16, company_name: &str) -> String {
    format!("© {year} {company_name}. All rights reserved.")
}

#[component]
/// Site footer: brand column, grouped links, contact details, social links, and an optional
/// newsletter form.
pub fn Footer(
    #[prop(into)] company_name: String,
    #[prop(optional, into)] tagline: Option<String>,
    #[prop(optional)] contact_info: Option<ContactInfo>,
    #[prop(optional)] link_sections: Vec<FooterLinkSection>,
    #[prop(optional)] social_links: Vec<SocialLink>,
    #[prop(optional)] legal_links: Vec<FooterLink>,
    #[prop(optional)] copyright_year: Option<u16>,
    #[prop(optional)] on_newsletter_signup: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let copyright = copyright_year.map(|year| copyright_line(year, &company_name));
    let tagline = tagline.filter(|tagline| !tagline.trim().is_empty());
    let contact_info = contact_info.filter(|info| !info.is_empty());

    let sections = link_sections
        .into_iter()
        .map(|section| {
            view! {
                <div class="ui-footer-section">
                    <Heading text=section.title level=4 layout_class="ui-footer-heading" />
                    <ul class="ui-footer-links">
                        {section
                            .links
                            .into_iter()
                            .map(|link| view! { <li>{link.render()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    let contact = contact_info.map(|info| {
        view! {
            <address class="ui-footer-contact">
                {info.email.map(|email| view! {
                    <a class="ui-footer-contact-line" href=mailto_href(&email)>
                        <Icon icon=IconName::Mail size=IconSize::Sm />
                        {email}
                    </a>
                })}
                {info.phone.map(|phone| view! {
                    <a class="ui-footer-contact-line" href=tel_href(&phone)>
                        <Icon icon=IconName::Phone size=IconSize::Sm />
                        {phone}
                    </a>
                })}
                {info.address.map(|address| view! {
                    <span class="ui-footer-contact-line">
                        <Icon icon=IconName::MapPin size=IconSize::Sm />
                        {address}
                    </span>
                })}
            </address>
        }
    });

    let socials = (!social_links.is_empty()).then(|| {
        view! {
            <div class="ui-footer-socials">
                <Heading text="Follow Us" level=4 layout_class="ui-footer-heading" />
                <div class="ui-footer-social-row">
                    {social_links.into_iter().map(SocialLink::render).collect_view()}
                </div>
            </div>
        }
    });

    let newsletter = on_newsletter_signup.map(|signup| {
        let draft = create_rw_signal(NewsletterDraft::default());
        view! {
            <form
                class="ui-footer-newsletter"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    draft.update(|draft| {
                        draft.submit(|email| signup.call(email));
                    });
                }
            >
                <Heading text="Stay Updated" level=4 layout_class="ui-footer-heading" />
                <Paragraph text="Subscribe to our newsletter for the latest updates and exclusive offers." />
                <TextField
                    input_type="email"
                    placeholder="Enter your email"
                    aria_label="Email address"
                    value=Signal::derive(move || draft.with(|draft| draft.email().to_string()))
                    on_input=Callback::new(move |value: String| draft.update(|draft| draft.set(value)))
                />
                <Button label="Subscribe" kind=ButtonKind::Submit size=ButtonSize::Small />
            </form>
        }
    });

    view! {
        <footer
            class=merge_layout_class("ui-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="footer"
        >
            <div class="ui-footer-grid">
                <div class="ui-footer-brand">
                    <Heading text=company_name level=3 layout_class="ui-footer-company" />
                    {tagline.map(|tagline| view! { <Paragraph text=tagline /> })}
                    {contact}
                </div>
                {sections}
                {socials}
                {newsletter}
            </div>
            {(copyright.is_some() || !legal_links.is_empty()).then(|| view! {
                <div class="ui-footer-bottom">
                    {copyright.map(|line| view! {
                        <Paragraph text=line element=ParagraphElement::Inline />
                    })}
                    <div class="ui-footer-legal">
                        {legal_links.into_iter().map(FooterLink::render).collect_view()}
                    </div>
                </div>
            })}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_newsletter_submit_is_a_no_op() {
        let mut draft = NewsletterDraft::default();
        let mut received = Vec::new();
        assert!(!draft.submit(|email| received.push(email)));
        assert!(received.is_empty());
        assert_eq!(draft.email(), "");

        draft.set("   ");
        assert!(!draft.submit(|email| received.push(email)));
        assert!(received.is_empty());
        assert_eq!(draft.email(), "   ");
    }

    #[test]
    fn newsletter_submit_trims_then_clears() {
        let mut draft = NewsletterDraft::default();
        draft.set(" a@b.com ");
        let mut received = Vec::new();
        assert!(draft.submit(|email| received.push(email)));
        assert_eq!(received, vec!["a@b.com".to_string()]);
        assert_eq!(draft.email(), "");
    }

    #[test]
    fn action_wins_over_href() {
        assert_eq!(resolve_link_behavior(Some("/about"), true), LinkBehavior::Act);
        assert_eq!(resolve_link_behavior(Some("/about"), false), LinkBehavior::Navigate);
        assert_eq!(resolve_link_behavior(None, false), LinkBehavior::Inert);
        assert_eq!(resolve_link_behavior(Some(" "), false), LinkBehavior::Inert);
    }

    #[test]
    fn contact_links_use_dialable_numbers() {
        assert_eq!(tel_href("+1 (555) 123-4567"), "tel:+15551234567");
        assert_eq!(mailto_href(" info@shoestyle.com "), "mailto:info@shoestyle.com");
    }

    #[test]
    fn copyright_names_company_and_year() {
        assert_eq!(
            copyright_line(2024, "ShoeStyle"),
            "© 2024 ShoeStyle. All rights reserved."
        );
    }
}
