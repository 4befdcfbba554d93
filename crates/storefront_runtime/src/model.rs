//! Storefront state model: routes, categories, products, color selections, and the contact form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Top-level pages of the storefront.
pub enum Route {
    /// Landing page.
    #[default]
    Home,
    /// Company and team page.
    About,
    /// Product catalog page.
    Products,
    /// Contact form page.
    Contact,
}

impl Route {
    /// Every route in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Products, Route::Contact];

    /// URL path for the route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Products => "/products",
            Self::Contact => "/contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Products => "Products",
            Self::Contact => "Contact",
        }
    }

    /// Document title shown for the route.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "ShoeStyle | Step Into Comfort & Style",
            Self::About => "About | ShoeStyle",
            Self::Products => "Products | ShoeStyle",
            Self::Contact => "Contact | ShoeStyle",
        }
    }

    /// Resolves a URL path. Trailing slashes, query strings, and fragments are ignored; unknown
    /// paths resolve to [`Route::Home`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Product categories.
pub enum Category {
    /// Running shoes.
    Running,
    /// Everyday shoes.
    Casual,
    /// Dress shoes.
    Formal,
    /// Athletic and outdoor shoes.
    Sport,
}

impl Category {
    /// Stable identifier used in configuration.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sport => "sport",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Active product category filter.
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product with `category` passes the filter.
    pub fn admits(self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A shoe offered by the store.
pub struct Product {
    /// Unique, stable product id.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Marketing copy.
    pub description: String,
    /// Preformatted price.
    pub price: String,
    /// Opaque image reference.
    pub image: String,
    /// Category, when the product belongs to one.
    #[serde(default)]
    pub category: Option<Category>,
    /// Offered colors in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Initially selected color.
    #[serde(default)]
    pub default_color: Option<String>,
}

impl Product {
    /// Whether `color` is one of the product's colors.
    pub fn offers(&self, color: &str) -> bool {
        self.colors.iter().any(|offered| offered == color)
    }
}

/// Order-preserving subset of `products` admitted by `filter`.
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| filter.admits(product.category))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Selected color per product id.
pub struct SelectedColorMap {
    selections: BTreeMap<String, String>,
}

impl SelectedColorMap {
    /// Seeds one entry per product that offers colors, using its default color.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let selections = products
            .into_iter()
            .filter(|product| !product.colors.is_empty())
            .filter_map(|product| {
                let color = product
                    .default_color
                    .clone()
                    .filter(|color| product.offers(color))
                    .or_else(|| product.colors.first().cloned())?;
                Some((product.id.clone(), color))
            })
            .collect();
        Self { selections }
    }

    /// Selected color for `product_id`.
    pub fn get(&self, product_id: &str) -> Option<&str> {
        self.selections.get(product_id).map(String::as_str)
    }

    /// Number of tracked products.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Whether no product is tracked.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub(crate) fn select(&mut self, product_id: &str, color: &str) -> bool {
        match self.selections.get_mut(product_id) {
            Some(current) if *current == color => false,
            Some(current) => {
                *current = color.to_string();
                true
            }
            None => {
                self.selections
                    .insert(product_id.to_string(), color.to_string());
                true
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Contact form fields.
pub enum ContactField {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Controlled contact form values.
pub struct ContactFormState {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactFormState {
    /// All three fields are non-blank after trimming.
    pub fn is_valid(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Every field is the empty string.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Current value of `field`.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub(crate) fn submission_message(&self) -> String {
        format!(
            "Form submitted!\nName: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Complete page-level storefront state.
pub struct StorefrontState {
    /// Current page.
    pub route: Route,
    /// Active catalog filter.
    pub category: CategoryFilter,
    /// Per-product color selections.
    pub colors: SelectedColorMap,
    /// Contact form values.
    pub contact: ContactFormState,
}

impl StorefrontState {
    /// Initial state for `route` with color selections seeded from `products`.
    pub fn new<'a>(route: Route, products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            route,
            colors: SelectedColorMap::from_products(products),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn product(id: &str, category: Option<Category>, colors: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            price: "$1.00".to_string(),
            image: String::new(),
            category,
            colors: colors.iter().map(|color| color.to_string()).collect(),
            default_color: colors.first().map(|color| color.to_string()),
        }
    }

    #[test]
    fn route_paths_resolve_and_unknown_paths_go_home() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/products/"), Route::Products);
        assert_eq!(Route::from_path("/contact?ref=footer"), Route::Contact);
        assert_eq!(Route::from_path("/about#team"), Route::About);
        assert_eq!(Route::from_path("/footer-demo"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn filter_all_keeps_everything_in_order() {
        let products = vec![
            product("a", Some(Category::Running), &[]),
            product("b", Some(Category::Casual), &[]),
            product("c", Some(Category::Running), &[]),
        ];
        let ids: Vec<&str> = filter_products(&products, CategoryFilter::All)
            .into_iter()
            .map(|product| product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_category_is_order_preserving_subset() {
        let products = vec![
            product("a", Some(Category::Running), &[]),
            product("b", Some(Category::Casual), &[]),
            product("c", Some(Category::Running), &[]),
            product("d", None, &[]),
        ];
        let ids: Vec<&str> = filter_products(&products, CategoryFilter::Only(Category::Running))
            .into_iter()
            .map(|product| product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(filter_products(&products, CategoryFilter::Only(Category::Formal)).is_empty());
    }

    #[test]
    fn color_map_seeds_defaults_and_skips_colorless_products() {
        let mut invalid_default = product("b", None, &["Brown", "Pink"]);
        invalid_default.default_color = Some("Green".to_string());
        let products = vec![
            product("a", None, &["Black", "White"]),
            invalid_default,
            product("c", None, &[]),
        ];
        let map = SelectedColorMap::from_products(&products);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("Black"));
        assert_eq!(map.get("b"), Some("Brown"));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn contact_validity_requires_three_non_blank_fields() {
        let mut form = ContactFormState::default();
        assert!(!form.is_valid());
        form.set(ContactField::Name, "Jane Doe".to_string());
        form.set(ContactField::Email, "jane@example.com".to_string());
        form.set(ContactField::Message, "   ".to_string());
        assert!(!form.is_valid());
        form.set(ContactField::Message, "Hello".to_string());
        assert!(form.is_valid());
        assert_eq!(form.field(ContactField::Email), "jane@example.com");
    }

    #[test]
    fn category_ids_match_configuration_tokens() {
        let ids: Vec<&str> = [
            Category::Running,
            Category::Casual,
            Category::Formal,
            Category::Sport,
        ]
        .into_iter()
        .map(Category::id)
        .collect();
        assert_eq!(ids, vec!["running", "casual", "formal", "sport"]);
    }
}
