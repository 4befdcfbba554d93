use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;
use storefront_ui::prelude::*;

use crate::{
    model::ContactField,
    reducer::StorefrontAction,
    runtime_context::{use_storefront_runtime, StorefrontRuntimeContext},
};

fn field_value(runtime: StorefrontRuntimeContext, field: ContactField) -> Signal<String> {
    Signal::derive(move || {
        runtime
            .state
            .with(|state| state.contact.field(field).to_string())
    })
}

fn field_input(runtime: StorefrontRuntimeContext, field: ContactField) -> Callback<String> {
    Callback::new(move |value: String| {
        runtime.dispatch_action(StorefrontAction::UpdateContactField { field, value });
    })
}

fn announce(runtime: StorefrontRuntimeContext, message: &str) -> Callback<()> {
    runtime.action_callback(StorefrontAction::Announce(message.to_string()))
}

#[component]
/// Controlled contact form plus FAQ and support cards.
pub fn ContactPage() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let invalid = Signal::derive(move || runtime.state.with(|state| !state.contact.is_valid()));

    view! {
        <div class="storefront-page" data-page="contact">
            <Section
                heading="Contact Us"
                lead="Get in touch with our team. We're here to help with any questions about our products."
            >
                <div class="storefront-contact-layout">
                    <form
                        class="storefront-contact-form"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            runtime.dispatch_action(StorefrontAction::SubmitContact);
                        }
                    >
                        <Stack gap=LayoutGap::Lg>
                            <FieldGroup label="Name" field_id="contact-name">
                                <TextField
                                    id="contact-name"
                                    name="name"
                                    placeholder="Your name"
                                    autocomplete="name"
                                    required=true
                                    value=field_value(runtime, ContactField::Name)
                                    on_input=field_input(runtime, ContactField::Name)
                                />
                            </FieldGroup>
                            <FieldGroup label="Email" field_id="contact-email">
                                <TextField
                                    id="contact-email"
                                    name="email"
                                    input_type="email"
                                    placeholder="your.email@example.com"
                                    autocomplete="email"
                                    required=true
                                    value=field_value(runtime, ContactField::Email)
                                    on_input=field_input(runtime, ContactField::Email)
                                />
                            </FieldGroup>
                            <FieldGroup label="Message" field_id="contact-message">
                                <TextArea
                                    id="contact-message"
                                    name="message"
                                    placeholder="Your message here..."
                                    rows=4
                                    required=true
                                    value=field_value(runtime, ContactField::Message)
                                    on_input=field_input(runtime, ContactField::Message)
                                />
                            </FieldGroup>
                            <Cluster layout_class="storefront-contact-actions">
                                <Button
                                    label="Submit Form"
                                    kind=ButtonKind::Submit
                                    disabled=invalid
                                />
                                <Button
                                    label="Reset Form"
                                    variant=ButtonVariant::Secondary
                                    kind=ButtonKind::Reset
                                    on_activate=Callback::new(move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        runtime.dispatch_action(StorefrontAction::ResetContact);
                                    })
                                />
                            </Cluster>
                        </Stack>
                    </form>
                    <Stack gap=LayoutGap::Lg layout_class="storefront-contact-sidebar">
                        <Card
                            title="Frequently Asked Questions"
                            description="Find quick answers to common questions about our products and services."
                            icon=IconName::Sparkles
                            on_activate=announce(runtime, "Opening FAQ section...")
                        />
                        <Card
                            title="Customer Support"
                            description="Need immediate help? Our support team is ready to assist you."
                            icon=IconName::Support
                            primary_action=CardAction::primary(
                                "Live Chat",
                                announce(runtime, "Opening live chat..."),
                            )
                            secondary_action=CardAction::secondary(
                                "Call Us",
                                announce(runtime, "Calling (555) 123-4567..."),
                            )
                        />
                    </Stack>
                </div>
            </Section>
        </div>
    }
}
