//! Centralized storefront icon catalog.
//!
//! Components reference icons by [`IconName`] instead of embedding SVG snippets, so pages and
//! configuration only ever carry a stable token.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by storefront components and page configuration.
pub enum IconName {
    /// Shield with a checkmark (quality, guarantees).
    ShieldCheck,
    /// Outline heart (customer care).
    Heart,
    /// Sparkles (design, premium materials).
    Sparkles,
    /// Lightning bolt (performance).
    Bolt,
    /// Globe (sustainability).
    Globe,
    /// Life buoy (support).
    Support,
    /// Group of people (team, community).
    Users,
    /// Image placeholder glyph shown when an image fails to load.
    Photo,
    /// Envelope.
    Mail,
    /// Telephone handset.
    Phone,
    /// Map pin.
    MapPin,
    /// Hamburger menu glyph.
    Menu,
    /// Dismiss/close glyph.
    Dismiss,
    /// Filled rating star.
    Star,
    /// Facebook brand mark.
    Facebook,
    /// Instagram brand mark.
    Instagram,
    /// Twitter brand mark.
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconPaint {
    Stroke,
    Fill,
}

impl IconName {
    /// Stable token used for CSS hooks and configuration files.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ShieldCheck => "shield-check",
            Self::Heart => "heart",
            Self::Sparkles => "sparkles",
            Self::Bolt => "bolt",
            Self::Globe => "globe",
            Self::Support => "support",
            Self::Users => "users",
            Self::Photo => "photo",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Dismiss => "dismiss",
            Self::Star => "star",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
        }
    }

    /// Resolves a configuration token back into an icon.
    pub fn from_token(token: &str) -> Option<Self> {
        const ALL: [IconName; 17] = [
            IconName::ShieldCheck,
            IconName::Heart,
            IconName::Sparkles,
            IconName::Bolt,
            IconName::Globe,
            IconName::Support,
            IconName::Users,
            IconName::Photo,
            IconName::Mail,
            IconName::Phone,
            IconName::MapPin,
            IconName::Menu,
            IconName::Dismiss,
            IconName::Star,
            IconName::Facebook,
            IconName::Instagram,
            IconName::Twitter,
        ];
        ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn paint(self) -> IconPaint {
        match self {
            Self::Star | Self::Facebook | Self::Instagram | Self::Twitter => IconPaint::Fill,
            _ => IconPaint::Stroke,
        }
    }

    fn view_box(self) -> &'static str {
        match self {
            Self::Star => "0 0 20 20",
            _ => "0 0 24 24",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::ShieldCheck => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"/>"#
            }
            Self::Heart => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"/>"#
            }
            Self::Sparkles => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"/>"#
            }
            Self::Bolt => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z"/>"#
            }
            Self::Globe => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9v-9m0-9v9"/>"#
            }
            Self::Support => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M18.364 5.636l-3.536 3.536m0 5.656l3.536 3.536M9.172 9.172L5.636 5.636m3.536 9.192L5.636 18.364M12 12h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/>"#
            }
            Self::Users => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197m13.5-9a2.5 2.5 0 11-5 0 2.5 2.5 0 015 0z"/>"#
            }
            Self::Photo => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"/>"#
            }
            Self::Mail => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 8l7.89 4.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/>"#
            }
            Self::Phone => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"/>"#
            }
            Self::MapPin => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"/><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"/>"#
            }
            Self::Menu => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>"#
            }
            Self::Dismiss => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>"#
            }
            Self::Star => {
                r#"<path d="M10 15l-5.878 3.09 1.123-6.545L.489 6.91l6.572-.955L10 0l2.939 5.955 6.572.955-4.756 4.635 1.123 6.545z"/>"#
            }
            Self::Facebook => {
                r#"<path fill-rule="evenodd" clip-rule="evenodd" d="M22 12c0-5.523-4.477-10-10-10S2 6.477 2 12c0 4.991 3.657 9.128 8.438 9.878v-6.987h-2.54V12h2.54V9.797c0-2.506 1.492-3.89 3.777-3.89 1.094 0 2.238.195 2.238.195v2.46h-1.26c-1.243 0-1.63.771-1.63 1.562V12h2.773l-.443 2.89h-2.33v6.988C18.343 21.128 22 16.991 22 12z"/>"#
            }
            Self::Instagram => {
                r#"<path fill-rule="evenodd" clip-rule="evenodd" d="M12.017 0C8.396 0 8.02.01 6.79.048 2.51.206.206 2.51.048 6.79.01 8.02 0 8.396 0 12.017c0 3.621.01 3.997.048 5.227.158 4.28 2.462 6.584 6.742 6.742 1.23.038 1.606.048 5.227.048 3.621 0 3.997-.01 5.227-.048 4.28-.158 6.584-2.462 6.742-6.742.038-1.23.048-1.606.048-5.227 0-3.621-.01-3.997-.048-5.227C23.794 2.51 21.49.206 17.21.048 15.98.01 15.604 0 12.017 0zm0 5.838a6.179 6.179 0 110 12.358 6.179 6.179 0 010-12.358zM12.017 15.55a3.371 3.371 0 10-.001-6.743 3.371 3.371 0 00.001 6.743zm6.624-10.845a1.48 1.48 0 11-2.96 0 1.48 1.48 0 012.96 0z"/>"#
            }
            Self::Twitter => {
                r#"<path d="M8.29 20.251c7.547 0 11.675-6.253 11.675-11.675 0-.178 0-.355-.012-.53A8.348 8.348 0 0022 5.92a8.19 8.19 0 01-2.357.646 4.118 4.118 0 001.804-2.27 8.224 8.224 0 01-2.605.996 4.107 4.107 0 00-6.993 3.743 11.65 11.65 0 01-8.457-4.287 4.106 4.106 0 001.27 5.477A4.072 4.072 0 012.8 9.713v.052a4.105 4.105 0 003.292 4.022 4.095 4.095 0 01-1.853.07 4.108 4.108 0 003.834 2.85A8.233 8.233 0 012 18.407a11.616 11.616 0 006.29 1.84"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px inline icon (contact rows, footer).
    Sm,
    /// 20px default icon (social links, ratings).
    #[default]
    Md,
    /// 24px feature icon.
    Lg,
    /// 48px placeholder glyph.
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let (fill, stroke) = match icon.paint() {
        IconPaint::Fill => ("currentColor", "none"),
        IconPaint::Stroke => ("none", "currentColor"),
    };

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox=icon.view_box()
            width=size_px.clone()
            height=size_px
            fill=fill
            stroke=stroke
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_round_trip_through_configuration() {
        for token in ["shield-check", "photo", "map-pin", "instagram", "star"] {
            let icon = IconName::from_token(token).expect("known token");
            assert_eq!(icon.token(), token);
        }
        assert_eq!(IconName::from_token("unicorn"), None);
    }

    #[test]
    fn brand_marks_and_star_are_filled() {
        assert_eq!(IconName::Star.paint(), IconPaint::Fill);
        assert_eq!(IconName::Twitter.paint(), IconPaint::Fill);
        assert_eq!(IconName::Photo.paint(), IconPaint::Stroke);
        assert_eq!(IconName::Star.view_box(), "0 0 20 20");
    }
}
