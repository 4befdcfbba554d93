use leptos::*;
use storefront_ui::prelude::*;

use super::{feature_cards, PageFeature};
use crate::{
    catalog::{Stat, TeamMember},
    model::Route,
    reducer::StorefrontAction,
    runtime_context::{use_storefront_runtime, StorefrontRuntimeContext},
};

const MISSION: [PageFeature; 3] = [
    PageFeature {
        title: "Quality Craftsmanship",
        description: "Every shoe is meticulously crafted using premium materials and time-tested techniques.",
        icon: IconName::ShieldCheck,
    },
    PageFeature {
        title: "Sustainable Practices",
        description: "We're committed to reducing our environmental impact through eco-friendly materials and processes.",
        icon: IconName::Heart,
    },
    PageFeature {
        title: "Customer First",
        description: "Your satisfaction drives everything we do, from design to delivery and beyond.",
        icon: IconName::Users,
    },
];

pub(crate) fn profile_notice(member: &TeamMember) -> String {
    format!("{} profile", member.name)
}

fn team_cards(runtime: StorefrontRuntimeContext, team: Vec<TeamMember>) -> View {
    team.into_iter()
        .map(|member| {
            let notice = profile_notice(&member);
            view! {
                <Card
                    title=member.name
                    description=member.role
                    image=member.image
                    primary_action=CardAction::primary(
                        "View Profile",
                        runtime.action_callback(StorefrontAction::Announce(notice)),
                    )
                    layout_class="storefront-team-card"
                />
            }
        })
        .collect_view()
}

fn stat_tiles(stats: Vec<Stat>) -> View {
    stats
        .into_iter()
        .map(|stat| {
            view! {
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center layout_class="storefront-stat">
                    <Heading text=stat.value level=3 color=BRAND_ACCENT />
                    <Paragraph text=stat.label element=ParagraphElement::Inline />
                </Stack>
            }
        })
        .collect_view()
}

#[component]
/// Company story, mission, team, careers call to action, and impact numbers.
pub fn AboutPage() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let (team, stats) = runtime
        .catalog
        .with_value(|catalog| (catalog.team.clone(), catalog.stats.clone()));

    let team_section = (!team.is_empty()).then(|| {
        view! {
            <Section
                heading="Meet Our Team"
                lead="The passionate individuals behind ShoeStyle who make it all possible."
            >
                <Grid columns=3>{team_cards(runtime, team)}</Grid>
            </Section>
        }
    });

    let impact = (!stats.is_empty()).then(|| {
        view! {
            <Section heading="Our Impact" muted=true>
                <Grid columns=4>{stat_tiles(stats)}</Grid>
            </Section>
        }
    });

    view! {
        <div class="storefront-page" data-page="about">
            <Section
                heading="About ShoeStyle"
                lead="We're passionate about creating premium footwear that combines style, comfort, and sustainability. Founded in 2020, ShoeStyle has been dedicated to revolutionizing the way people think about shoes."
            >
                <Cluster layout_class="storefront-intro-actions">
                    <Button
                        label="Learn Our Story"
                        size=ButtonSize::Large
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(StorefrontAction::Announce(
                                "Learn more about our story!".to_string(),
                            ));
                        })
                    />
                </Cluster>
            </Section>
            <Section
                heading="Our Mission"
                lead="To create exceptional footwear that empowers people to walk confidently through life while protecting our planet."
                muted=true
            >
                <Grid columns=3>{feature_cards(&MISSION)}</Grid>
            </Section>
            {team_section}
            <Section
                heading="Join Our Journey"
                lead="We're always looking for talented individuals who share our passion for quality and sustainability."
                layout_class="storefront-cta"
            >
                <Cluster layout_class="storefront-cta-actions">
                    <Button
                        label="View Careers"
                        size=ButtonSize::Large
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(StorefrontAction::Announce(
                                "Join our team - careers page coming soon!".to_string(),
                            ));
                        })
                    />
                    <Button
                        label="Contact Us"
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Large
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(StorefrontAction::Navigate(Route::Contact));
                        })
                    />
                </Cluster>
            </Section>
            {impact}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn profile_notice_names_the_member() {
        let member = TeamMember {
            id: "michael-chen".to_string(),
            name: "Michael Chen".to_string(),
            role: "Head of Design".to_string(),
            image: String::new(),
        };
        assert_eq!(profile_notice(&member), "Michael Chen profile");
    }
}
