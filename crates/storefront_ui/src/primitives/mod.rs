//! Storefront primitives: typography, controls, cards, navigation, footer, hero, and layout.
//!
//! Every visual variant is a closed enum whose style lookup is an exhaustive `match`, so adding a
//! variant without styling it fails to compile.

use leptos::ev::{KeyboardEvent, MouseEvent, SubmitEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod card;
mod controls;
mod footer;
mod hero;
mod layout;
mod navigation;
mod typography;

pub use card::{is_activation_key, resolve_card_media, Card, CardAction, CardMedia};
pub use controls::{activate_unless_disabled, Button, FieldGroup, TextArea, TextField};
pub use footer::{
    resolve_link_behavior, ContactInfo, Footer, FooterLink, FooterLinkSection, LinkBehavior,
    NewsletterDraft, SocialLink,
};
pub use hero::{Hero, HeroAction};
pub use layout::{Cluster, EmptyState, Grid, Section, Stack};
pub use navigation::{close_and_activate, nav_item_is_current, DisclosureMenu, NavItem, Navbar};
pub use typography::{heading_inline_style, Heading, Paragraph, DEFAULT_HEADING_COLOR};

/// Brand accent used by primary treatments and selected swatches.
pub const BRAND_ACCENT: &str = "#009488";
/// Darker accent used on hover.
pub const BRAND_ACCENT_HOVER: &str = "#0C827A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button color treatments.
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Outlined accent button.
    Secondary,
}

/// Color treatment resolved from a [`ButtonVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTreatment {
    /// Resting background color.
    pub background: &'static str,
    /// Label color.
    pub foreground: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Background color on hover.
    pub hover_background: &'static str,
    /// Label color on hover.
    pub hover_foreground: &'static str,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Color treatment for this variant.
    pub const fn treatment(self) -> ButtonTreatment {
        match self {
            Self::Primary => ButtonTreatment {
                background: BRAND_ACCENT,
                foreground: "#FFFFFF",
                border: BRAND_ACCENT,
                hover_background: BRAND_ACCENT_HOVER,
                hover_foreground: "#FFFFFF",
            },
            Self::Secondary => ButtonTreatment {
                background: "transparent",
                foreground: BRAND_ACCENT,
                border: BRAND_ACCENT,
                hover_background: BRAND_ACCENT,
                hover_foreground: "#FFFFFF",
            },
        }
    }
}

impl ButtonTreatment {
    fn css(self) -> String {
        format!(
            "background-color: {}; color: {}; border: 2px solid {}; --ui-button-hover-bg: {}; --ui-button-hover-fg: {};",
            self.background,
            self.foreground,
            self.border,
            self.hover_background,
            self.hover_foreground
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button spacing/typography scale.
pub enum ButtonSize {
    /// Dense button.
    Small,
    /// Default button.
    #[default]
    Medium,
    /// Call-to-action button.
    Large,
}

/// Spacing and typography resolved from a [`ButtonSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeScale {
    /// Horizontal padding in pixels.
    pub padding_x_px: u16,
    /// Vertical padding in pixels.
    pub padding_y_px: u16,
    /// Label font size in pixels.
    pub font_size_px: u16,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }

    /// Spacing/typography scale for this size.
    pub const fn scale(self) -> SizeScale {
        match self {
            Self::Small => SizeScale {
                padding_x_px: 8,
                padding_y_px: 4,
                font_size_px: 14,
            },
            Self::Medium => SizeScale {
                padding_x_px: 12,
                padding_y_px: 6,
                font_size_px: 16,
            },
            Self::Large => SizeScale {
                padding_x_px: 16,
                padding_y_px: 8,
                font_size_px: 18,
            },
        }
    }
}

impl SizeScale {
    fn css(self) -> String {
        format!(
            "padding: {}px {}px; font-size: {}px;",
            self.padding_y_px, self.padding_x_px, self.font_size_px
        )
    }
}

/// Inline style for a button: the variant treatment followed by the size scale.
pub fn button_style(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("{} {}", variant.treatment().css(), size.scale().css())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Native `type` of a button element.
pub enum ButtonKind {
    /// Plain button.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl ButtonKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic heading levels.
pub enum HeadingLevel {
    /// `<h1>`, the most prominent level.
    #[default]
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

/// Typography resolved from a [`HeadingLevel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    /// Font size on wide viewports.
    pub desktop_px: u16,
    /// Font size on narrow viewports.
    pub mobile_px: u16,
    /// Font weight.
    pub weight: u16,
    /// Unitless line height.
    pub line_height: f32,
}

impl HeadingLevel {
    /// Maps a numeric level to a heading level.
    ///
    /// Anything outside `1..=6` falls back to [`HeadingLevel::H1`].
    pub const fn from_level(level: u8) -> Self {
        match level {
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            _ => Self::H1,
        }
    }

    /// Element tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Typography for this level.
    pub const fn style(self) -> HeadingStyle {
        match self {
            Self::H1 => HeadingStyle {
                desktop_px: 48,
                mobile_px: 32,
                weight: 700,
                line_height: 1.1,
            },
            Self::H2 => HeadingStyle {
                desktop_px: 36,
                mobile_px: 28,
                weight: 700,
                line_height: 1.2,
            },
            Self::H3 => HeadingStyle {
                desktop_px: 24,
                mobile_px: 20,
                weight: 600,
                line_height: 1.3,
            },
            Self::H4 => HeadingStyle {
                desktop_px: 20,
                mobile_px: 18,
                weight: 600,
                line_height: 1.4,
            },
            Self::H5 => HeadingStyle {
                desktop_px: 18,
                mobile_px: 16,
                weight: 600,
                line_height: 1.4,
            },
            Self::H6 => HeadingStyle {
                desktop_px: 16,
                mobile_px: 14,
                weight: 600,
                line_height: 1.4,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Element a [`Paragraph`] renders as.
pub enum ParagraphElement {
    /// Block paragraph (`<p>`).
    #[default]
    Block,
    /// Inline run (`<span>`).
    Inline,
    /// Generic container (`<div>`).
    Container,
}

impl ParagraphElement {
    /// Element tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Block => "p",
            Self::Inline => "span",
            Self::Container => "div",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card layout orientation.
pub enum CardOrientation {
    /// Media stacked above content.
    #[default]
    Vertical,
    /// Media beside content on wide viewports, stacked on narrow ones.
    Horizontal,
}

impl CardOrientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
