//! Storefront shell: navbar, routed page body, and footer wired to the runtime context.

use leptos::*;
use storefront_ui::{
    ContactInfo, Footer, FooterLink, FooterLinkSection, IconName, NavItem, Navbar, SocialLink,
};

use crate::{
    catalog::{FooterLinkEntry, StorefrontCatalog},
    model::Route,
    pages::{AboutPage, ContactPage, HomePage, ProductsPage},
    reducer::StorefrontAction,
    runtime_context::use_storefront_runtime,
};

pub use crate::runtime_context::{StorefrontProvider, StorefrontRuntimeContext};

const DEFAULT_COPYRIGHT_YEAR: u16 = 2024;

/// In-site route for a footer `href`; external and fragment links stay plain links.
pub(crate) fn footer_route(href: Option<&str>) -> Option<Route> {
    href.filter(|href| href.starts_with('/') && !href.starts_with("//"))
        .map(Route::from_path)
}

fn footer_link(runtime: StorefrontRuntimeContext, entry: &FooterLinkEntry) -> FooterLink {
    match footer_route(entry.href.as_deref()) {
        Some(route) => FooterLink {
            label: entry.label.clone(),
            href: Some(route.path().to_string()),
            on_activate: Some(runtime.action_callback(StorefrontAction::Navigate(route))),
        },
        None => FooterLink {
            label: entry.label.clone(),
            href: entry.href.clone(),
            on_activate: None,
        },
    }
}

fn nav_items(runtime: StorefrontRuntimeContext) -> Vec<NavItem> {
    Route::ALL
        .into_iter()
        .map(|route| {
            NavItem::new(
                route.label(),
                runtime.action_callback(StorefrontAction::Navigate(route)),
            )
            .with_href(route.path())
        })
        .collect()
}

#[component]
fn StorefrontFooter(runtime: StorefrontRuntimeContext) -> impl IntoView {
    let StorefrontCatalog {
        brand,
        contact,
        footer_sections,
        social_links,
        ..
    } = runtime.catalog.get_value();

    let link_sections = footer_sections
        .iter()
        .map(|section| FooterLinkSection {
            title: section.title.clone(),
            links: section
                .links
                .iter()
                .map(|entry| footer_link(runtime, entry))
                .collect(),
        })
        .collect::<Vec<_>>();

    let social_links = social_links
        .into_iter()
        .map(|social| SocialLink {
            icon: IconName::from_token(&social.icon).unwrap_or(IconName::Globe),
            name: social.name,
            href: social.href,
            on_activate: None,
        })
        .collect::<Vec<_>>();

    let legal_links = ["Privacy Policy", "Terms of Service"]
        .into_iter()
        .map(|label| {
            FooterLink::action(
                label,
                runtime.action_callback(StorefrontAction::Announce(format!(
                    "{label} coming soon!"
                ))),
            )
        })
        .collect::<Vec<_>>();

    let contact_info = contact.map(|contact| ContactInfo {
        email: contact.email,
        phone: contact.phone,
        address: contact.address,
    });

    let on_newsletter_signup = Callback::new(move |email: String| {
        runtime.dispatch_action(StorefrontAction::SubscribeNewsletter { email });
    });

    view! {
        <Footer
            company_name=brand.company_name
            tagline=brand.tagline.unwrap_or_default()
            contact_info=contact_info.unwrap_or_default()
            link_sections=link_sections
            social_links=social_links
            legal_links=legal_links
            copyright_year=brand.copyright_year.unwrap_or(DEFAULT_COPYRIGHT_YEAR)
            on_newsletter_signup=on_newsletter_signup
        />
    }
}

#[component]
/// Full storefront layout for the current route.
pub fn StorefrontShell() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let route = create_memo(move |_| runtime.state.with(|state| state.route));
    let company_name = runtime
        .catalog
        .with_value(|catalog| catalog.brand.company_name.clone());

    view! {
        <div class="storefront" data-route=move || route.get().label().to_lowercase()>
            <Navbar
                logo_label=company_name
                on_logo_activate=runtime.action_callback(StorefrontAction::Navigate(Route::Home))
                items=nav_items(runtime)
                active=Signal::derive(move || route.get().label().to_string())
                on_sign_in=runtime.action_callback(StorefrontAction::SignIn)
            />
            <main class="storefront-main">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_view(),
                    Route::About => view! { <AboutPage /> }.into_view(),
                    Route::Products => view! { <ProductsPage /> }.into_view(),
                    Route::Contact => view! { <ContactPage /> }.into_view(),
                }}
            </main>
            <StorefrontFooter runtime=runtime />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn footer_routes_only_cover_in_site_paths() {
        assert_eq!(footer_route(Some("/contact")), Some(Route::Contact));
        assert_eq!(footer_route(Some("/unknown")), Some(Route::Home));
        assert_eq!(footer_route(Some("https://facebook.com")), None);
        assert_eq!(footer_route(Some("//cdn.example.com")), None);
        assert_eq!(footer_route(Some("#size-guide")), None);
        assert_eq!(footer_route(None), None);
    }
}
