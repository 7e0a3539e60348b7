//! The draft store and its pure transition functions.

use crate::error::CoreError;
use crate::validation::{is_valid_email, is_valid_mobile};

use super::draft::{DraftId, DraftPatch, DraftSeed, NameplateDraft};
use super::themes;

/// Explicit state container for the nameplate editor.
///
/// Holds the draft list and the id of the draft currently being edited.
/// Every transition is a plain method call; nothing here touches the
/// database or the network.
#[derive(Debug, Clone)]
pub struct DraftStore {
    drafts: Vec<NameplateDraft>,
    active_id: DraftId,
    next_id: DraftId,
}

impl DraftStore {
    /// Create a store with one default draft seeded from the officer's
    /// hierarchy / contact fields. That draft is active.
    pub fn new(seed: &DraftSeed) -> Self {
        let first = NameplateDraft::with_defaults(1, seed);
        Self {
            drafts: vec![first],
            active_id: 1,
            next_id: 2,
        }
    }

    /// All drafts in insertion order.
    pub fn drafts(&self) -> &[NameplateDraft] {
        &self.drafts
    }

    /// Id of the draft currently being edited.
    pub fn active_id(&self) -> DraftId {
        self.active_id
    }

    /// The draft currently being edited.
    pub fn active(&self) -> &NameplateDraft {
        // Invariant: active_id always names an existing draft.
        self.drafts
            .iter()
            .find(|d| d.id == self.active_id)
            .expect("active draft exists")
    }

    fn active_mut(&mut self) -> &mut NameplateDraft {
        let active_id = self.active_id;
        self.drafts
            .iter_mut()
            .find(|d| d.id == active_id)
            .expect("active draft exists")
    }

    /// Append a new draft with default display fields, copying the
    /// hierarchy / contact fields from the current active draft. The new
    /// draft becomes active.
    pub fn add(&mut self) -> DraftId {
        let seed = self.active().seed();
        let id = self.next_id;
        self.next_id += 1;
        self.drafts.push(NameplateDraft::with_defaults(id, &seed));
        self.active_id = id;
        id
    }

    /// Shallow-merge the `Some` fields of `patch` into the active draft.
    /// All other drafts are untouched.
    pub fn update(&mut self, patch: DraftPatch) {
        let draft = self.active_mut();
        if let Some(v) = patch.background {
            draft.background = v;
        }
        if let Some(v) = patch.house_name {
            draft.house_name = v;
        }
        if let Some(v) = patch.owner_name {
            draft.owner_name = v;
        }
        if let Some(v) = patch.address {
            draft.address = v;
        }
        if let Some(v) = patch.house_name_color {
            draft.house_name_color = v;
        }
        if let Some(v) = patch.house_name_size {
            draft.house_name_size = v;
        }
        if let Some(v) = patch.owner_name_color {
            draft.owner_name_color = v;
        }
        if let Some(v) = patch.owner_name_size {
            draft.owner_name_size = v;
        }
        if let Some(v) = patch.address_color {
            draft.address_color = v;
        }
        if let Some(v) = patch.address_size {
            draft.address_size = v;
        }
        if let Some(v) = patch.officer_name {
            draft.officer_name = v;
        }
        if let Some(v) = patch.email {
            draft.email = v;
        }
        if let Some(v) = patch.mobile_number {
            draft.mobile_number = v;
        }
        if let Some(v) = patch.designation {
            draft.designation = v;
        }
    }

    /// Remove a draft. Refused when it is the last one remaining. When the
    /// active draft is removed, the first remaining draft becomes active.
    pub fn delete(&mut self, id: DraftId) -> Result<(), CoreError> {
        if self.drafts.len() == 1 {
            return Err(CoreError::Validation(
                "Cannot delete the last remaining draft".into(),
            ));
        }
        let index = self
            .drafts
            .iter()
            .position(|d| d.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Draft",
                id: id as i64,
            })?;
        self.drafts.remove(index);
        if self.active_id == id {
            self.active_id = self.drafts[0].id;
        }
        Ok(())
    }

    /// Clone a draft, appending `" (Copy)"` to its house name and officer
    /// name. The clone becomes active.
    pub fn duplicate(&mut self, id: DraftId) -> Result<DraftId, CoreError> {
        let source = self
            .drafts
            .iter()
            .find(|d| d.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Draft",
                id: id as i64,
            })?;

        let mut clone = source.clone();
        clone.id = self.next_id;
        self.next_id += 1;
        clone.house_name.push_str(" (Copy)");
        clone.officer_name.push_str(" (Copy)");

        let new_id = clone.id;
        self.drafts.push(clone);
        self.active_id = new_id;
        Ok(new_id)
    }

    /// Switch the active draft to another theme, resetting its background
    /// to that theme's first template.
    pub fn set_theme(&mut self, theme_id: &str) -> Result<(), CoreError> {
        let background = themes::first_background(theme_id)
            .ok_or_else(|| CoreError::Validation(format!("Unknown theme '{theme_id}'")))?;
        let draft = self.active_mut();
        draft.theme = theme_id.to_string();
        draft.background = background.to_string();
        Ok(())
    }
}

/// Validate a draft for submission, returning **every** violation by name.
///
/// Field names in the messages match the keys the record API expects, so
/// the client can surface them verbatim.
pub fn validate(draft: &NameplateDraft) -> Vec<String> {
    let mut violations = Vec::new();

    let required = [
        ("theme", &draft.theme),
        ("background", &draft.background),
        ("houseName", &draft.house_name),
        ("ownerName", &draft.owner_name),
        ("address", &draft.address),
        ("rmo", &draft.rmo),
        ("officer", &draft.officer),
        ("lot", &draft.lot),
        ("officer_name", &draft.officer_name),
        ("email", &draft.email),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            violations.push(format!("{name} is required"));
        }
    }

    if !draft.theme.trim().is_empty() && themes::find_theme(&draft.theme).is_none() {
        violations.push(format!("Unknown theme '{}'", draft.theme));
    }

    if !draft.email.trim().is_empty() && !is_valid_email(&draft.email) {
        violations.push("Invalid email format".to_string());
    }

    if !draft.mobile_number.trim().is_empty() && !is_valid_mobile(&draft.mobile_number) {
        violations.push("Mobile number must be 10-15 digits".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::designer::themes::{THEME_CLASSIC, THEME_PREMIUM};

    fn seed() -> DraftSeed {
        DraftSeed {
            rmo: "RMO1".into(),
            officer: "OFF11".into(),
            lot: "LOT-A".into(),
            officer_name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            mobile_number: "9876543210".into(),
            designation: "Sales Officer".into(),
        }
    }

    fn complete_draft(store: &mut DraftStore) {
        store.update(DraftPatch {
            house_name: Some("Rose Villa".into()),
            owner_name: Some("R. Kumar".into()),
            address: Some("12 Lake Road".into()),
            ..Default::default()
        });
    }

    #[test]
    fn new_store_has_one_active_seeded_draft() {
        let store = DraftStore::new(&seed());
        assert_eq!(store.drafts().len(), 1);
        assert_eq!(store.active_id(), 1);
        let draft = store.active();
        assert_eq!(draft.rmo, "RMO1");
        assert_eq!(draft.officer, "OFF11");
        assert_eq!(draft.theme, THEME_CLASSIC);
        assert_eq!(draft.background, "/themes/classic/template-1.png");
    }

    #[test]
    fn add_copies_contact_fields_and_activates() {
        let mut store = DraftStore::new(&seed());
        complete_draft(&mut store);

        let id = store.add();
        assert_eq!(store.drafts().len(), 2);
        assert_eq!(store.active_id(), id);

        let added = store.active();
        // Hierarchy / contact fields carried over, display fields reset.
        assert_eq!(added.rmo, "RMO1");
        assert_eq!(added.email, "asha@example.com");
        assert_eq!(added.house_name, "");
        assert_eq!(added.owner_name, "");
    }

    #[test]
    fn update_touches_only_the_active_draft() {
        let mut store = DraftStore::new(&seed());
        complete_draft(&mut store);
        let first_snapshot = store.drafts()[0].clone();

        store.add();
        store.update(DraftPatch {
            house_name: Some("Sunrise Cottage".into()),
            house_name_color: Some("#ff0000".into()),
            ..Default::default()
        });

        assert_eq!(store.active().house_name, "Sunrise Cottage");
        assert_eq!(store.active().house_name_color, "#ff0000");
        // The first draft is bit-for-bit unchanged.
        assert_eq!(store.drafts()[0], first_snapshot);
    }

    #[test]
    fn delete_last_draft_is_refused() {
        let mut store = DraftStore::new(&seed());
        let result = store.delete(1);
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(store.drafts().len(), 1);
    }

    #[test]
    fn delete_active_reselects_a_remaining_draft() {
        let mut store = DraftStore::new(&seed());
        let second = store.add();
        assert_eq!(store.active_id(), second);

        store.delete(second).expect("delete should succeed");
        assert_eq!(store.drafts().len(), 1);
        assert_eq!(store.active_id(), 1);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = DraftStore::new(&seed());
        store.add();
        let result = store.delete(99);
        assert_matches!(result, Err(CoreError::NotFound { entity: "Draft", .. }));
        assert_eq!(store.drafts().len(), 2);
    }

    #[test]
    fn duplicate_appends_copy_suffix_and_activates() {
        let mut store = DraftStore::new(&seed());
        complete_draft(&mut store);

        let clone_id = store.duplicate(1).expect("duplicate should succeed");
        assert_eq!(store.active_id(), clone_id);

        let clone = store.active();
        assert_eq!(clone.house_name, "Rose Villa (Copy)");
        assert_eq!(clone.officer_name, "Asha Verma (Copy)");
        // Display styling is cloned as-is.
        assert_eq!(clone.address, "12 Lake Road");
        assert_eq!(store.drafts()[0].house_name, "Rose Villa");
    }

    #[test]
    fn set_theme_resets_background_to_first_template() {
        let mut store = DraftStore::new(&seed());
        store.update(DraftPatch {
            background: Some("/themes/classic/template-3.png".into()),
            ..Default::default()
        });

        store.set_theme(THEME_PREMIUM).expect("theme is known");
        assert_eq!(store.active().theme, THEME_PREMIUM);
        assert_eq!(store.active().background, "/themes/premium/template-1.png");
    }

    #[test]
    fn set_theme_rejects_unknown_theme() {
        let mut store = DraftStore::new(&seed());
        let result = store.set_theme("neon");
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(store.active().theme, THEME_CLASSIC);
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let store = DraftStore::new(&DraftSeed::default());
        let violations = validate(store.active());

        // Seeded with empty hierarchy fields and no display fields filled in.
        assert!(violations.contains(&"houseName is required".to_string()));
        assert!(violations.contains(&"ownerName is required".to_string()));
        assert!(violations.contains(&"address is required".to_string()));
        assert!(violations.contains(&"rmo is required".to_string()));
        assert!(violations.contains(&"officer is required".to_string()));
        assert!(violations.contains(&"lot is required".to_string()));
        assert!(violations.contains(&"officer_name is required".to_string()));
        assert!(violations.contains(&"email is required".to_string()));
    }

    #[test]
    fn validate_flags_bad_email_and_mobile() {
        let mut store = DraftStore::new(&seed());
        complete_draft(&mut store);
        store.update(DraftPatch {
            email: Some("not-an-email".into()),
            mobile_number: Some("12345".into()),
            ..Default::default()
        });

        let violations = validate(store.active());
        assert!(violations.contains(&"Invalid email format".to_string()));
        assert!(violations.contains(&"Mobile number must be 10-15 digits".to_string()));
    }

    #[test]
    fn validate_passes_a_complete_draft() {
        let mut store = DraftStore::new(&seed());
        complete_draft(&mut store);
        assert!(validate(store.active()).is_empty());
    }
}
