//! Routed storefront pages and the product card they share.

mod about;
mod contact;
mod home;
mod products;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use products::ProductsPage;

use leptos::*;
use storefront_ui::{Card, CardAction, CardOrientation, IconName};

use crate::{model::Product, reducer::StorefrontAction, runtime_context::use_storefront_runtime};

/// Copy for an icon-led card that only the page itself shows.
pub(crate) struct PageFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

pub(crate) fn feature_cards(features: &[PageFeature]) -> View {
    features
        .iter()
        .map(|feature| {
            view! {
                <Card
                    title=feature.title
                    description=feature.description
                    icon=feature.icon
                    layout_class="storefront-feature-card"
                />
            }
        })
        .collect_view()
}

/// Action fired by a product card's primary button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PrimaryIntent {
    /// Add the product in its selected color to the cart.
    AddToCart,
    /// Surface a fixed message instead.
    Announce(String),
}

impl PrimaryIntent {
    fn action(self, product_id: &str) -> StorefrontAction {
        match self {
            Self::AddToCart => StorefrontAction::AddToCart {
                product_id: product_id.to_string(),
            },
            Self::Announce(message) => StorefrontAction::Announce(message),
        }
    }
}

#[component]
/// Product card bound to the runtime's color selection for `product`.
pub(crate) fn ProductCard(
    product: Product,
    #[prop(default = "Add to Cart")] primary_label: &'static str,
    #[prop(default = PrimaryIntent::AddToCart)] primary_intent: PrimaryIntent,
    #[prop(default = "Learn More")] secondary_label: &'static str,
    #[prop(into)] secondary_notice: String,
    #[prop(default = CardOrientation::Vertical)] orientation: CardOrientation,
) -> impl IntoView {
    let runtime = use_storefront_runtime();
    let Product {
        id,
        title,
        description,
        price,
        image,
        colors,
        ..
    } = product;

    let selected_id = id.clone();
    let selected_color = Signal::derive(move || {
        runtime
            .state
            .with(|state| state.colors.get(&selected_id).map(str::to_string))
    });
    let color_id = id.clone();
    let on_color_select = Callback::new(move |color: String| {
        runtime.dispatch_action(StorefrontAction::SelectColor {
            product_id: color_id.clone(),
            color,
        });
    });

    let primary_action = CardAction::primary(
        primary_label,
        runtime.action_callback(primary_intent.action(&id)),
    );
    let secondary_action = CardAction::secondary(
        secondary_label,
        runtime.action_callback(StorefrontAction::Announce(secondary_notice)),
    );

    view! {
        <Card
            title=title
            description=description
            price=price
            image=image
            colors=colors
            selected_color=selected_color
            on_color_select=on_color_select
            primary_action=primary_action
            secondary_action=secondary_action
            orientation=orientation
            layout_class="storefront-product-card"
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn primary_intent_targets_the_card_product() {
        assert_eq!(
            PrimaryIntent::AddToCart.action("sport-max"),
            StorefrontAction::AddToCart {
                product_id: "sport-max".to_string()
            }
        );
        assert_eq!(
            PrimaryIntent::Announce("Pre-order Limited Edition Runner!".to_string())
                .action("limited-edition-runner"),
            StorefrontAction::Announce("Pre-order Limited Edition Runner!".to_string())
        );
    }
}
