//! Reducer actions, side-effect intents, and transition logic for the storefront runtime.

use thiserror::Error;

use crate::catalog::StorefrontCatalog;
use crate::model::{CategoryFilter, ContactField, Route, StorefrontState};

/// Notification emitted after a contact form reset that changed something.
pub const RESET_NOTICE: &str = "Form has been reset!";
/// Notification emitted for the sign-in affordance.
pub const SIGN_IN_NOTICE: &str = "Sign In functionality coming soon!";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_storefront`] to mutate [`StorefrontState`].
pub enum StorefrontAction {
    /// Switch to another page.
    Navigate(Route),
    /// Change the products page filter.
    SelectCategory(CategoryFilter),
    /// Choose a color for one product.
    SelectColor {
        /// Product whose selection changes.
        product_id: String,
        /// Newly selected color.
        color: String,
    },
    /// Add a product in its selected color to the cart.
    AddToCart {
        /// Product being added.
        product_id: String,
    },
    /// Replace one contact form field.
    UpdateContactField {
        /// Field being edited.
        field: ContactField,
        /// New raw value.
        value: String,
    },
    /// Submit the contact form.
    SubmitContact,
    /// Clear the contact form.
    ResetContact,
    /// Subscribe an address to the newsletter.
    SubscribeNewsletter {
        /// Address entered in the footer.
        email: String,
    },
    /// Sign-in affordance activated.
    SignIn,
    /// Surface a free-form message to the visitor.
    Announce(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by the reducer and executed by the host layer.
pub enum StorefrontEffect {
    /// Present a message through the notification service.
    Notify(String),
    /// Sync the browser location with the new route.
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer failures. State is left untouched when one is returned.
pub enum ReducerError {
    /// The product id is not part of the catalog.
    #[error("product `{0}` not found")]
    UnknownProduct(String),
    /// The product does not come in the requested color.
    #[error("product `{product_id}` is not offered in `{color}`")]
    ColorNotOffered {
        /// Product id.
        product_id: String,
        /// Rejected color.
        color: String,
    },
}

/// Applies a [`StorefrontAction`] to the storefront state and collects resulting side effects.
///
/// Navigation is always allowed; only an actual route change emits [`StorefrontEffect::Navigate`].
///
/// # Errors
///
/// Returns [`ReducerError::UnknownProduct`] when an action names a product missing from
/// `catalog`, and [`ReducerError::ColorNotOffered`] when a color selection is not one of the
/// product's colors.
pub fn reduce_storefront(
    state: &mut StorefrontState,
    catalog: &StorefrontCatalog,
    action: StorefrontAction,
) -> Result<Vec<StorefrontEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        StorefrontAction::Navigate(route) => {
            if state.route != route {
                state.route = route;
                effects.push(StorefrontEffect::Navigate(route));
            }
        }
        StorefrontAction::SelectCategory(filter) => {
            state.category = filter;
        }
        StorefrontAction::SelectColor { product_id, color } => {
            let product = catalog
                .product(&product_id)
                .ok_or_else(|| ReducerError::UnknownProduct(product_id.clone()))?;
            if !product.offers(&color) {
                return Err(ReducerError::ColorNotOffered { product_id, color });
            }
            state.colors.select(&product_id, &color);
        }
        StorefrontAction::AddToCart { product_id } => {
            let product = catalog
                .product(&product_id)
                .ok_or_else(|| ReducerError::UnknownProduct(product_id.clone()))?;
            let message = match state.colors.get(&product_id) {
                Some(color) => format!("Added {} ({color}) to cart!", product.title),
                None => format!("Added {} to cart!", product.title),
            };
            effects.push(StorefrontEffect::Notify(message));
        }
        StorefrontAction::UpdateContactField { field, value } => {
            state.contact.set(field, value);
        }
        StorefrontAction::SubmitContact => {
            if state.contact.is_valid() {
                effects.push(StorefrontEffect::Notify(
                    state.contact.submission_message(),
                ));
            }
        }
        StorefrontAction::ResetContact => {
            if !state.contact.is_empty() {
                state.contact = Default::default();
                effects.push(StorefrontEffect::Notify(RESET_NOTICE.to_string()));
            }
        }
        StorefrontAction::SubscribeNewsletter { email } => {
            let email = email.trim();
            if !email.is_empty() {
                effects.push(StorefrontEffect::Notify(format!(
                    "Thanks for subscribing! Updates will be sent to {email}."
                )));
            }
        }
        StorefrontAction::SignIn => {
            effects.push(StorefrontEffect::Notify(SIGN_IN_NOTICE.to_string()));
        }
        StorefrontAction::Announce(message) => {
            if !message.trim().is_empty() {
                effects.push(StorefrontEffect::Notify(message));
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{builtin_catalog_json, parse_catalog};
    use crate::model::Category;

    fn catalog() -> StorefrontCatalog {
        parse_catalog(builtin_catalog_json()).expect("builtin catalog")
    }

    fn initial(catalog: &StorefrontCatalog) -> StorefrontState {
        StorefrontState::new(Route::Home, catalog.all_products())
    }

    fn fill_contact(state: &mut StorefrontState, catalog: &StorefrontCatalog) {
        for (field, value) in [
            (ContactField::Name, "Jane Doe"),
            (ContactField::Email, "jane@example.com"),
            (ContactField::Message, "Hello"),
        ] {
            let effects = reduce_storefront(
                state,
                catalog,
                StorefrontAction::UpdateContactField {
                    field,
                    value: value.to_string(),
                },
            )
            .expect("update field");
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn initial_route_is_home_and_navigation_only_emits_on_change() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        assert_eq!(state.route, Route::Home);

        let effects =
            reduce_storefront(&mut state, &catalog, StorefrontAction::Navigate(Route::Products))
                .expect("navigate");
        assert_eq!(effects, vec![StorefrontEffect::Navigate(Route::Products)]);
        assert_eq!(state.route, Route::Products);

        let effects =
            reduce_storefront(&mut state, &catalog, StorefrontAction::Navigate(Route::Products))
                .expect("navigate again");
        assert!(effects.is_empty());
        assert_eq!(state.route, Route::Products);
    }

    #[test]
    fn selecting_a_color_leaves_other_products_untouched() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        let before = state.colors.get("casual-comfort").map(str::to_string);

        reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::SelectColor {
                product_id: "running-pro".to_string(),
                color: "Red".to_string(),
            },
        )
        .expect("select color");

        assert_eq!(state.colors.get("running-pro"), Some("Red"));
        assert_eq!(state.colors.get("casual-comfort").map(str::to_string), before);
    }

    #[test]
    fn rejected_color_selections_leave_state_unchanged() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        let before = state.clone();

        assert_eq!(
            reduce_storefront(
                &mut state,
                &catalog,
                StorefrontAction::SelectColor {
                    product_id: "running-pro".to_string(),
                    color: "Plaid".to_string(),
                },
            ),
            Err(ReducerError::ColorNotOffered {
                product_id: "running-pro".to_string(),
                color: "Plaid".to_string(),
            })
        );
        assert_eq!(
            reduce_storefront(
                &mut state,
                &catalog,
                StorefrontAction::SelectColor {
                    product_id: "missing".to_string(),
                    color: "Red".to_string(),
                },
            ),
            Err(ReducerError::UnknownProduct("missing".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn add_to_cart_uses_the_selected_color() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::SelectColor {
                product_id: "urban-classic".to_string(),
                color: "Navy".to_string(),
            },
        )
        .expect("select color");

        let effects = reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::AddToCart {
                product_id: "urban-classic".to_string(),
            },
        )
        .expect("add to cart");
        assert_eq!(
            effects,
            vec![StorefrontEffect::Notify(
                "Added Urban Classic (Navy) to cart!".to_string()
            )]
        );
    }

    #[test]
    fn valid_contact_submission_notifies_without_clearing() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        fill_contact(&mut state, &catalog);
        assert!(state.contact.is_valid());

        let effects = reduce_storefront(&mut state, &catalog, StorefrontAction::SubmitContact)
            .expect("submit");
        assert_eq!(effects.len(), 1);
        let StorefrontEffect::Notify(message) = &effects[0] else {
            panic!("expected a notification, got {effects:?}");
        };
        for value in ["Jane Doe", "jane@example.com", "Hello"] {
            assert!(message.contains(value), "{message} is missing {value}");
        }
        assert_eq!(state.contact.name, "Jane Doe");
        assert_eq!(state.contact.email, "jane@example.com");
        assert_eq!(state.contact.message, "Hello");
    }

    #[test]
    fn invalid_contact_submission_emits_nothing() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::UpdateContactField {
                field: ContactField::Name,
                value: "Jane".to_string(),
            },
        )
        .expect("update");
        let effects = reduce_storefront(&mut state, &catalog, StorefrontAction::SubmitContact)
            .expect("submit");
        assert!(effects.is_empty());
    }

    #[test]
    fn reset_on_empty_form_is_silent() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        let before = state.clone();
        let effects = reduce_storefront(&mut state, &catalog, StorefrontAction::ResetContact)
            .expect("reset");
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn reset_clears_filled_form_and_reports_completion() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        fill_contact(&mut state, &catalog);
        let effects = reduce_storefront(&mut state, &catalog, StorefrontAction::ResetContact)
            .expect("reset");
        assert_eq!(
            effects,
            vec![StorefrontEffect::Notify(RESET_NOTICE.to_string())]
        );
        assert!(state.contact.is_empty());
    }

    #[test]
    fn category_filter_is_stored_without_effects() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        let effects = reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::SelectCategory(CategoryFilter::Only(Category::Formal)),
        )
        .expect("select category");
        assert!(effects.is_empty());
        assert_eq!(state.category, CategoryFilter::Only(Category::Formal));
    }

    #[test]
    fn newsletter_ignores_blank_addresses_and_trims_real_ones() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        let effects = reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::SubscribeNewsletter {
                email: "   ".to_string(),
            },
        )
        .expect("blank");
        assert!(effects.is_empty());

        let effects = reduce_storefront(
            &mut state,
            &catalog,
            StorefrontAction::SubscribeNewsletter {
                email: " a@b.com ".to_string(),
            },
        )
        .expect("subscribe");
        assert_eq!(
            effects,
            vec![StorefrontEffect::Notify(
                "Thanks for subscribing! Updates will be sent to a@b.com.".to_string()
            )]
        );
    }

    #[test]
    fn sign_in_and_announcements_notify() {
        let catalog = catalog();
        let mut state = initial(&catalog);
        assert_eq!(
            reduce_storefront(&mut state, &catalog, StorefrontAction::SignIn),
            Ok(vec![StorefrontEffect::Notify(SIGN_IN_NOTICE.to_string())])
        );
        assert_eq!(
            reduce_storefront(
                &mut state,
                &catalog,
                StorefrontAction::Announce("Opening live chat...".to_string())
            ),
            Ok(vec![StorefrontEffect::Notify(
                "Opening live chat...".to_string()
            )])
        );
    }
}
