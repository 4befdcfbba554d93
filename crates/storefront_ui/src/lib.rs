//! Shared UI primitive library for the ShoeStyle storefront pages.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the storefront stylesheet. Pages
//! compose these primitives and report intent upward through callbacks; no
//! primitive mutates page state on its own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    activate_unless_disabled, button_style, close_and_activate, heading_inline_style,
    is_activation_key, nav_item_is_current, resolve_card_media, resolve_link_behavior, Button,
    ButtonKind, ButtonSize, ButtonTreatment, ButtonVariant, Card, CardAction, CardMedia,
    CardOrientation, Cluster, ContactInfo, DisclosureMenu, EmptyState, FieldGroup, Footer,
    FooterLink, FooterLinkSection, Grid, Heading, HeadingLevel, HeadingStyle, Hero, HeroAction,
    LayoutAlign, LayoutGap, LinkBehavior, NavItem, Navbar, NewsletterDraft, Paragraph,
    ParagraphElement, Section, SizeScale, SocialLink, Stack, TextArea, TextField, BRAND_ACCENT,
    BRAND_ACCENT_HOVER, DEFAULT_HEADING_COLOR,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonKind, ButtonSize, ButtonVariant, Card, CardAction, CardOrientation, Cluster,
        ContactInfo, EmptyState, FieldGroup, Footer, FooterLink, FooterLinkSection, Grid, Heading,
        Hero, HeroAction, Icon, IconName, IconSize, LayoutAlign, LayoutGap, NavItem, Navbar,
        Paragraph, ParagraphElement, Section, SocialLink, Stack, TextArea, TextField, BRAND_ACCENT,
    };
}
