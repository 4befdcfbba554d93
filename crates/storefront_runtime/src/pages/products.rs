use leptos::*;
use storefront_ui::prelude::*;

use super::{feature_cards, PageFeature, PrimaryIntent, ProductCard};
use crate::{
    catalog::CategoryEntry,
    model::{filter_products, CategoryFilter, Product},
    reducer::StorefrontAction,
    runtime_context::use_storefront_runtime,
};

pub(crate) const EMPTY_CATEGORY_MESSAGE: &str = "No products found in this category.";

const QUALITY_FEATURES: [PageFeature; 4] = [
    PageFeature {
        title: "Premium Materials",
        description: "Only the finest materials are used in our manufacturing process.",
        icon: IconName::Sparkles,
    },
    PageFeature {
        title: "Comfort Technology",
        description: "Advanced cushioning and support systems for all-day comfort.",
        icon: IconName::Heart,
    },
    PageFeature {
        title: "Sustainable Design",
        description: "Eco-friendly materials and sustainable production methods.",
        icon: IconName::Globe,
    },
    PageFeature {
        title: "Quality Guarantee",
        description: "100% satisfaction guarantee with comprehensive warranty coverage.",
        icon: IconName::ShieldCheck,
    },
];

/// Filter buttons in display order, starting with the `All` sentinel.
pub(crate) fn filter_options(categories: &[CategoryEntry]) -> Vec<(CategoryFilter, String)> {
    std::iter::once((CategoryFilter::All, "All Products".to_string()))
        .chain(
            categories
                .iter()
                .map(|entry| (CategoryFilter::Only(entry.id), entry.label.clone())),
        )
        .collect()
}

/// What the product grid region shows for the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GridContent {
    Empty(&'static str),
    Products(Vec<Product>),
}

pub(crate) fn grid_content(products: &[Product], filter: CategoryFilter) -> GridContent {
    let visible = filter_products(products, filter);
    if visible.is_empty() {
        return GridContent::Empty(EMPTY_CATEGORY_MESSAGE);
    }
    GridContent::Products(visible.into_iter().cloned().collect())
}

#[component]
/// Product catalog with category filter, quality highlights, and the spotlight product.
pub fn ProductsPage() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let category = create_memo(move |_| runtime.state.with(|state| state.category));
    let (options, spotlight) = runtime.catalog.with_value(|catalog| {
        (filter_options(&catalog.categories), catalog.spotlight.clone())
    });

    let filter_buttons = options
        .into_iter()
        .map(|(filter, label)| {
            view! {
                <Button
                    label=label
                    variant=Signal::derive(move || {
                        if category.get() == filter {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Secondary
                        }
                    })
                    on_activate=Callback::new(move |_| {
                        runtime.dispatch_action(StorefrontAction::SelectCategory(filter));
                    })
                    layout_class="storefront-filter-button"
                />
            }
        })
        .collect_view();

    let product_grid = move || {
        let filter = category.get();
        let visible = match runtime
            .catalog
            .with_value(|catalog| grid_content(&catalog.products, filter))
        {
            GridContent::Empty(message) => {
                return view! { <EmptyState message=message /> }.into_view();
            }
            GridContent::Products(products) => products,
        };
        view! {
            <Grid columns=3>
                {visible
                    .into_iter()
                    .map(|product| {
                        let notice = format!("View details for {}", product.title);
                        view! {
                            <ProductCard
                                product=product
                                secondary_label="View Details"
                                secondary_notice=notice
                            />
                        }
                    })
                    .collect_view()}
            </Grid>
        }
        .into_view()
    };

    let spotlight = spotlight.map(|product| {
        let pre_order = format!("Pre-order {}!", product.title);
        let learn_more = format!("Learn more about {}", product.title);
        view! {
            <Section heading="Featured Product">
                <ProductCard
                    product=product
                    primary_label="Pre-Order Now"
                    primary_intent=PrimaryIntent::Announce(pre_order)
                    secondary_notice=learn_more
                    orientation=CardOrientation::Horizontal
                />
            </Section>
        }
    });

    view! {
        <div class="storefront-page" data-page="products">
            <Section
                heading="Our Product Collection"
                lead="Discover our complete range of premium footwear designed for every occasion and lifestyle."
            >
                <Cluster layout_class="storefront-filters">{filter_buttons}</Cluster>
                {product_grid}
            </Section>
            <Section
                heading="Why Choose ShoeStyle?"
                lead="Every pair of shoes is crafted with attention to detail and built to last."
                muted=true
            >
                <Grid columns=4>{feature_cards(&QUALITY_FEATURES)}</Grid>
            </Section>
            {spotlight}
            <Section
                heading="Can't Find What You're Looking For?"
                lead="Contact our expert team to help you find the perfect shoe for your needs."
                layout_class="storefront-cta"
            >
                <Cluster layout_class="storefront-cta-actions">
                    <Button
                        label="Contact Expert"
                        size=ButtonSize::Large
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(StorefrontAction::Announce(
                                "Connecting you with a shoe expert...".to_string(),
                            ));
                        })
                    />
                    <Button
                        label="Custom Order"
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Large
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(StorefrontAction::Announce(
                                "Custom shoe order coming soon!".to_string(),
                            ));
                        })
                    />
                </Cluster>
            </Section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{builtin_catalog_json, parse_catalog};
    use crate::model::Category;

    #[test]
    fn filter_options_start_with_all_products() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let options = filter_options(&catalog.categories);
        let labels: Vec<&str> = options.iter().map(|(_, label)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All Products", "Running", "Casual", "Formal", "Sport"]
        );
        assert_eq!(options[0].0, CategoryFilter::All);
        assert_eq!(options[3].0, CategoryFilter::Only(Category::Formal));
    }

    #[test]
    fn formal_filter_shows_only_formal_shoes() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let ids: Vec<&str> =
            filter_products(&catalog.products, CategoryFilter::Only(Category::Formal))
                .into_iter()
                .map(|product| product.id.as_str())
                .collect();
        assert_eq!(ids, vec!["formal-elite"]);
    }

    #[test]
    fn empty_catalog_shows_the_empty_state_for_any_filter() {
        for filter in [CategoryFilter::All, CategoryFilter::Only(Category::Sport)] {
            assert_eq!(
                grid_content(&[], filter),
                GridContent::Empty("No products found in this category.")
            );
        }
    }

    #[test]
    fn category_without_products_shows_the_empty_state() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let running_only: Vec<Product> = catalog
            .products
            .iter()
            .filter(|product| product.category == Some(Category::Running))
            .cloned()
            .collect();
        assert!(!running_only.is_empty());

        assert_eq!(
            grid_content(&running_only, CategoryFilter::Only(Category::Formal)),
            GridContent::Empty(EMPTY_CATEGORY_MESSAGE)
        );
        assert_eq!(
            grid_content(&running_only, CategoryFilter::Only(Category::Running)),
            GridContent::Products(running_only.clone())
        );
    }

    #[test]
    fn populated_category_fills_the_grid() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let GridContent::Products(products) =
            grid_content(&catalog.products, CategoryFilter::Only(Category::Formal))
        else {
            panic!("formal shoes should fill the grid");
        };
        let ids: Vec<&str> = products.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, vec!["formal-elite"]);
    }
}
