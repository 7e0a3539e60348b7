//! Brand theme catalog.
//!
//! Each theme ships four background templates. The catalog is compile-time
//! data exposed to the client via the API and used to validate submissions.

use serde::Serialize;

/// A brand theme with its background template references.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
    pub backgrounds: [&'static str; 4],
}

/// Classic theme identifier.
pub const THEME_CLASSIC: &str = "classic";

/// Premium theme identifier.
pub const THEME_PREMIUM: &str = "premium";

const CATALOG: &[Theme] = &[
    Theme {
        id: THEME_CLASSIC,
        label: "Classic",
        backgrounds: [
            "/themes/classic/template-1.png",
            "/themes/classic/template-2.png",
            "/themes/classic/template-3.png",
            "/themes/classic/template-4.png",
        ],
    },
    Theme {
        id: THEME_PREMIUM,
        label: "Premium",
        backgrounds: [
            "/themes/premium/template-1.png",
            "/themes/premium/template-2.png",
            "/themes/premium/template-3.png",
            "/themes/premium/template-4.png",
        ],
    },
];

/// The full theme catalog.
pub fn theme_catalog() -> &'static [Theme] {
    CATALOG
}

/// Look up a theme by id.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    CATALOG.iter().find(|t| t.id == id)
}

/// The first background template of a theme, used as the reset value when
/// the theme changes.
pub fn first_background(theme_id: &str) -> Option<&'static str> {
    find_theme(theme_id).map(|t| t.backgrounds[0])
}
