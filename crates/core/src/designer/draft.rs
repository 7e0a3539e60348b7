//! Draft configuration types and their defaults.

use serde::{Deserialize, Serialize};

use super::themes;

/// Identifier of a draft within a [`super::DraftStore`]. Local to the
/// editing session, unrelated to database ids.
pub type DraftId = u32;

/// Default color applied to every text field of a fresh draft.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Default font size for the house name.
pub const DEFAULT_HOUSE_NAME_SIZE: i32 = 28;
/// Default font size for the owner name.
pub const DEFAULT_OWNER_NAME_SIZE: i32 = 22;
/// Default font size for the address.
pub const DEFAULT_ADDRESS_SIZE: i32 = 16;

/// A single nameplate design in the editor.
///
/// Display fields (names, address, colors, sizes) vary per draft; the
/// hierarchy and contact fields are carried from draft to draft so every
/// submission lands under the right RMO / officer / lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameplateDraft {
    pub id: DraftId,
    pub theme: String,
    pub background: String,
    pub house_name: String,
    pub owner_name: String,
    pub address: String,
    pub house_name_color: String,
    pub house_name_size: i32,
    pub owner_name_color: String,
    pub owner_name_size: i32,
    pub address_color: String,
    pub address_size: i32,
    pub rmo: String,
    pub officer: String,
    pub lot: String,
    pub officer_name: String,
    pub email: String,
    pub mobile_number: String,
    pub designation: String,
}

impl NameplateDraft {
    /// Build a draft with default display fields and the given hierarchy /
    /// contact fields. The theme is the first catalog entry with its first
    /// background template.
    pub fn with_defaults(id: DraftId, seed: &DraftSeed) -> Self {
        let theme = themes::theme_catalog()[0].id;
        let background = themes::first_background(theme).unwrap_or_default();
        Self {
            id,
            theme: theme.to_string(),
            background: background.to_string(),
            house_name: String::new(),
            owner_name: String::new(),
            address: String::new(),
            house_name_color: DEFAULT_TEXT_COLOR.to_string(),
            house_name_size: DEFAULT_HOUSE_NAME_SIZE,
            owner_name_color: DEFAULT_TEXT_COLOR.to_string(),
            owner_name_size: DEFAULT_OWNER_NAME_SIZE,
            address_color: DEFAULT_TEXT_COLOR.to_string(),
            address_size: DEFAULT_ADDRESS_SIZE,
            rmo: seed.rmo.clone(),
            officer: seed.officer.clone(),
            lot: seed.lot.clone(),
            officer_name: seed.officer_name.clone(),
            email: seed.email.clone(),
            mobile_number: seed.mobile_number.clone(),
            designation: seed.designation.clone(),
        }
    }

    /// The hierarchy / contact fields of this draft as a seed for new drafts.
    pub fn seed(&self) -> DraftSeed {
        DraftSeed {
            rmo: self.rmo.clone(),
            officer: self.officer.clone(),
            lot: self.lot.clone(),
            officer_name: self.officer_name.clone(),
            email: self.email.clone(),
            mobile_number: self.mobile_number.clone(),
            designation: self.designation.clone(),
        }
    }
}

/// Hierarchy and contact fields used to seed a draft.
#[derive(Debug, Clone, Default)]
pub struct DraftSeed {
    pub rmo: String,
    pub officer: String,
    pub lot: String,
    pub officer_name: String,
    pub email: String,
    pub mobile_number: String,
    pub designation: String,
}

/// Shallow patch applied to the active draft.
///
/// `None` fields are left untouched. Theme switches go through
/// [`super::DraftStore::set_theme`] instead so the background resets with
/// the theme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    pub background: Option<String>,
    pub house_name: Option<String>,
    pub owner_name: Option<String>,
    pub address: Option<String>,
    pub house_name_color: Option<String>,
    pub house_name_size: Option<i32>,
    pub owner_name_color: Option<String>,
    pub owner_name_size: Option<i32>,
    pub address_color: Option<String>,
    pub address_size: Option<i32>,
    pub officer_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
}
