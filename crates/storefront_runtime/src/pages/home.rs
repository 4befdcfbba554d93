use leptos::*;
use storefront_ui::prelude::*;

use super::ProductCard;
use crate::{model::Route, reducer::StorefrontAction, runtime_context::use_storefront_runtime};

const TESTIMONIAL: &str = "These shoes have completely transformed my running experience. The comfort and support are unmatched, and they look great with any outfit. I couldn't be happier with my purchase! The customer service was also exceptional.";

#[component]
/// Landing page: hero, featured products, selling points, and a customer review.
pub fn HomePage() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let (hero_image, featured, features) = runtime.catalog.with_value(|catalog| {
        (
            catalog.brand.hero_image.clone(),
            catalog.featured_products.clone(),
            catalog.features.clone(),
        )
    });

    let hero = view! {
        <Hero
            title="Step Into Comfort & Style"
            subtitle="Discover our new collection of premium shoes designed for both comfort and style. Crafted with the finest materials and attention to detail."
            background_image=hero_image.unwrap_or_default()
            primary_action=HeroAction::new(
                "Shop Collection",
                runtime.action_callback(StorefrontAction::Navigate(Route::Products)),
            )
            secondary_action=HeroAction::new(
                "Learn More",
                runtime.action_callback(StorefrontAction::Navigate(Route::About)),
            )
        />
    };

    let featured_grid = (!featured.is_empty()).then(|| {
        view! {
            <Section
                heading="Featured Products"
                lead="Discover our most popular shoes, chosen for comfort, durability, and style."
            >
                <Grid columns=3>
                    {featured
                        .into_iter()
                        .map(|product| {
                            let notice = format!("Learn more about {}", product.title);
                            view! { <ProductCard product=product secondary_notice=notice /> }
                        })
                        .collect_view()}
                </Grid>
            </Section>
        }
    });

    let feature_grid = (!features.is_empty()).then(|| {
        view! {
            <Section
                heading="Why Choose Our Shoes?"
                lead="Discover the features that make our footwear exceptional for every lifestyle."
                muted=true
            >
                <Grid columns=4>
                    {features
                        .into_iter()
                        .map(|feature| {
                            let icon = feature.icon_name();
                            view! {
                                <Card
                                    title=feature.title
                                    description=feature.description
                                    icon=icon
                                    layout_class="storefront-feature-card"
                                />
                            }
                        })
                        .collect_view()}
                </Grid>
            </Section>
        }
    });

    view! {
        <div class="storefront-page" data-page="home">
            {hero}
            {featured_grid}
            {feature_grid}
            <Section heading="Customer Reviews">
                <Stack align=LayoutAlign::Center>
                    <Card
                        title="Amazing Quality and Comfort!"
                        description=TESTIMONIAL
                        icon=IconName::Star
                        layout_class="storefront-testimonial"
                    />
                    <Paragraph
                        text="- Sarah Johnson, Marathon Runner"
                        element=ParagraphElement::Inline
                        color="#009488"
                        style="font-weight: 600;"
                    />
                </Stack>
            </Section>
        </div>
    }
}
