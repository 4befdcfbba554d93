use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATEGORY_IDS: [&str; 4] = ["running", "casual", "formal", "sport"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductEntry {
    id: String,
    title: String,
    description: String,
    price: String,
    image: String,
    category: Option<String>,
    #[serde(default)]
    colors: Vec<String>,
    default_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryEntry {
    id: String,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    brand: toml::Value,
    #[serde(default)]
    contact: Option<toml::Value>,
    categories: Vec<CategoryEntry>,
    products: Vec<ProductEntry>,
    #[serde(default)]
    featured_products: Vec<ProductEntry>,
    #[serde(default)]
    spotlight: Option<ProductEntry>,
    #[serde(default)]
    features: Vec<toml::Value>,
    #[serde(default)]
    team: Vec<toml::Value>,
    #[serde(default)]
    stats: Vec<toml::Value>,
    #[serde(default)]
    footer_sections: Vec<toml::Value>,
    #[serde(default)]
    social_links: Vec<toml::Value>,
}

fn check_products(manifest: &CatalogManifest, path: &str) {
    let mut seen = BTreeSet::new();
    let all = manifest
        .products
        .iter()
        .chain(manifest.featured_products.iter())
        .chain(manifest.spotlight.iter());
    for product in all {
        if !seen.insert(product.id.as_str()) {
            panic!("duplicate product id `{}` in {path}", product.id);
        }
        if let Some(category) = product.category.as_deref() {
            if !CATEGORY_IDS.contains(&category) {
                panic!(
                    "product `{}` in {path} uses unknown category `{category}`",
                    product.id
                );
            }
        }
        if product.colors.is_empty() {
            continue;
        }
        match product.default_color.as_deref() {
            Some(color) if product.colors.iter().any(|offered| offered == color) => {}
            Some(color) => panic!(
                "product `{}` in {path} defaults to `{color}` which is not one of its colors",
                product.id
            ),
            None => panic!(
                "product `{}` in {path} offers colors but has no default_color",
                product.id
            ),
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("storefront.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    for category in &manifest.categories {
        if !CATEGORY_IDS.contains(&category.id.as_str()) {
            panic!("unknown category `{}` in {}", category.id, path.display());
        }
    }
    check_products(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize storefront catalog");
    let generated = format!(
        "/// Build-time generated storefront catalog JSON.\n\
pub const STOREFRONT_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("storefront_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
