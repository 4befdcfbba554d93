//! Build-time storefront catalog: brand, contact details, products, and static page content.
//!
//! `build.rs` converts `storefront.toml` into JSON; this module deserializes and validates that
//! payload. A catalog that fails to load is replaced by an empty one so pages still render.

use std::collections::BTreeSet;

use leptos::logging;
use serde::{Deserialize, Serialize};
use storefront_ui::IconName;
use thiserror::Error;

use crate::model::{Category, Product};

include!(concat!(env!("OUT_DIR"), "/storefront_catalog_generated.rs"));

const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Company identity shown in the navbar, hero, and footer.
pub struct Brand {
    /// Company display name.
    pub company_name: String,
    /// One-line company description.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Year printed in the copyright line.
    #[serde(default)]
    pub copyright_year: Option<u16>,
    /// Home page hero background.
    #[serde(default)]
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Public contact details.
pub struct ContactDetails {
    /// Contact mailbox.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Filterable category with its button label.
pub struct CategoryEntry {
    /// Category id.
    pub id: Category,
    /// Filter button label.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Icon-led selling point.
pub struct Feature {
    /// Stable id.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Card copy.
    pub description: String,
    /// Icon token understood by [`IconName::from_token`].
    pub icon: String,
}

impl Feature {
    /// Resolved icon; unknown tokens fall back to a generic glyph.
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Sparkles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Team member card.
pub struct TeamMember {
    /// Stable id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Portrait reference.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Headline number on the About page.
pub struct Stat {
    /// Preformatted value.
    pub value: String,
    /// Caption.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Footer link entry.
pub struct FooterLinkEntry {
    /// Visible label.
    pub label: String,
    /// In-site path or external URL; absent entries render inert.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Titled footer link group.
pub struct FooterSectionEntry {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub links: Vec<FooterLinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Social network link.
pub struct SocialLinkEntry {
    /// Network name.
    pub name: String,
    /// Profile URL.
    #[serde(default)]
    pub href: Option<String>,
    /// Icon token.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Everything the storefront pages render from configuration.
pub struct StorefrontCatalog {
    /// Configuration schema version.
    pub schema_version: u32,
    /// Company identity.
    #[serde(default)]
    pub brand: Brand,
    /// Public contact details.
    #[serde(default)]
    pub contact: Option<ContactDetails>,
    /// Filter buttons in display order.
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    /// Products page catalog.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Home page product grid.
    #[serde(default)]
    pub featured_products: Vec<Product>,
    /// Products page horizontal spotlight.
    #[serde(default)]
    pub spotlight: Option<Product>,
    /// Selling points.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// About page team.
    #[serde(default)]
    pub team: Vec<TeamMember>,
    /// About page numbers.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Footer link groups.
    #[serde(default)]
    pub footer_sections: Vec<FooterSectionEntry>,
    /// Footer social links.
    #[serde(default)]
    pub social_links: Vec<SocialLinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Catalog loading and validation failures.
pub enum CatalogError {
    /// The payload is not valid catalog JSON.
    #[error("catalog payload is malformed: {0}")]
    Malformed(String),
    /// The payload uses an unsupported schema.
    #[error("catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch {
        /// Supported version.
        expected: u32,
        /// Version in the payload.
        found: u32,
    },
    /// Two products share an id.
    #[error("duplicate product id `{0}`")]
    DuplicateProduct(String),
    /// A product offers colors without a default.
    #[error("product `{0}` offers colors but has no default color")]
    MissingDefaultColor(String),
    /// A product's default color is not one of its colors.
    #[error("product `{product_id}` defaults to `{color}` which it does not offer")]
    DefaultColorNotOffered {
        /// Offending product.
        product_id: String,
        /// Configured default.
        color: String,
    },
    /// A category filter has a blank label.
    #[error("category `{}` has an empty label", .0.id())]
    EmptyCategoryLabel(Category),
    /// An icon token is not part of the icon set.
    #[error("`{owner}` uses unknown icon `{token}`")]
    UnknownIcon {
        /// Feature id or social network name.
        owner: String,
        /// Unrecognized token.
        token: String,
    },
}

impl StorefrontCatalog {
    /// Every product across the catalog, featured grid, and spotlight.
    pub fn all_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .chain(self.featured_products.iter())
            .chain(self.spotlight.iter())
    }

    /// Looks up a product by id anywhere in the catalog.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.all_products().find(|product| product.id == product_id)
    }

    /// Checks catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: schema version, unique product ids, default colors
    /// that are offered, non-blank category labels, and known icon tokens.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(CatalogError::SchemaMismatch {
                expected: SUPPORTED_SCHEMA_VERSION,
                found: self.schema_version,
            });
        }

        let mut seen = BTreeSet::new();
        for product in self.all_products() {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if product.colors.is_empty() {
                continue;
            }
            match product.default_color.as_deref() {
                None => return Err(CatalogError::MissingDefaultColor(product.id.clone())),
                Some(color) if !product.offers(color) => {
                    return Err(CatalogError::DefaultColorNotOffered {
                        product_id: product.id.clone(),
                        color: color.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        if let Some(entry) = self
            .categories
            .iter()
            .find(|entry| entry.label.trim().is_empty())
        {
            return Err(CatalogError::EmptyCategoryLabel(entry.id));
        }

        let icon_owners = self
            .features
            .iter()
            .map(|feature| (&feature.id, &feature.icon))
            .chain(
                self.social_links
                    .iter()
                    .map(|social| (&social.name, &social.icon)),
            );
        for (owner, token) in icon_owners {
            if IconName::from_token(token).is_none() {
                return Err(CatalogError::UnknownIcon {
                    owner: owner.clone(),
                    token: token.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Parses and validates a catalog JSON payload.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for unparsable JSON, otherwise any
/// [`StorefrontCatalog::validate`] failure.
pub fn parse_catalog(json: &str) -> Result<StorefrontCatalog, CatalogError> {
    let catalog: StorefrontCatalog =
        serde_json::from_str(json).map_err(|err| CatalogError::Malformed(err.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Returns the generated catalog JSON payload.
pub fn builtin_catalog_json() -> &'static str {
    STOREFRONT_CATALOG_JSON
}

/// Loads the built-in catalog, falling back to an empty catalog when it is invalid.
pub fn load_catalog() -> StorefrontCatalog {
    match parse_catalog(builtin_catalog_json()) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("storefront catalog load failed: {err}");
            StorefrontCatalog {
                schema_version: SUPPORTED_SCHEMA_VERSION,
                ..StorefrontCatalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("builtin catalog");
        assert_eq!(catalog.brand.company_name, "ShoeStyle");
        assert_eq!(catalog.products.len(), 6);
        assert_eq!(catalog.featured_products.len(), 3);
        assert_eq!(catalog.categories.len(), 4);
        assert!(catalog.spotlight.is_some());
        assert_eq!(
            catalog
                .product("trail-explorer")
                .and_then(|product| product.default_color.as_deref()),
            Some("Brown")
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            parse_catalog("{ not json"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn unsupported_schema_is_rejected() {
        assert_eq!(
            parse_catalog(r#"{ "schema_version": 2 }"#),
            Err(CatalogError::SchemaMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    fn catalog_with(products: Vec<Product>) -> StorefrontCatalog {
        StorefrontCatalog {
            schema_version: 1,
            products,
            ..StorefrontCatalog::default()
        }
    }

    fn shoe(id: &str, colors: &[&str], default_color: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            price: "$10.00".to_string(),
            image: String::new(),
            category: None,
            colors: colors.iter().map(|color| color.to_string()).collect(),
            default_color: default_color.map(str::to_string),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected_across_sections() {
        let mut catalog = catalog_with(vec![shoe("a", &[], None)]);
        catalog.spotlight = Some(shoe("a", &[], None));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateProduct("a".to_string()))
        );
    }

    #[test]
    fn default_color_must_be_offered() {
        let catalog = catalog_with(vec![shoe("trail", &["Brown", "Pink"], Some("Green"))]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DefaultColorNotOffered {
                product_id: "trail".to_string(),
                color: "Green".to_string(),
            })
        );

        let catalog = catalog_with(vec![shoe("trail", &["Brown"], None)]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingDefaultColor("trail".to_string()))
        );
    }

    #[test]
    fn unknown_icon_tokens_are_rejected() {
        let mut catalog = catalog_with(Vec::new());
        catalog.features.push(Feature {
            id: "comfort".to_string(),
            title: "Comfort".to_string(),
            description: String::new(),
            icon: "unicorn".to_string(),
        });
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownIcon {
                owner: "comfort".to_string(),
                token: "unicorn".to_string(),
            })
        );
        assert_eq!(catalog.features[0].icon_name(), IconName::Sparkles);
    }

    #[test]
    fn blank_category_label_is_rejected() {
        let mut catalog = catalog_with(Vec::new());
        catalog.categories.push(CategoryEntry {
            id: Category::Formal,
            label: "  ".to_string(),
        });
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyCategoryLabel(Category::Formal))
        );
    }
}
