//! Typed form state.
//!
//! The form-binding collaborator (out of scope here) owns the validation
//! rules; coordinators only read the state it reports.  A submit proceeds
//! when every field is valid, and a field's error styling shows only once
//! the user has touched it.

/// Reported state of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub valid: bool,
    /// `true` until the user first edits the field.
    pub pristine: bool,
}

impl FieldState {
    /// State of a field the user has not touched yet.
    pub fn untouched(valid: bool) -> Self {
        Self {
            valid,
            pristine: true,
        }
    }

    /// State of a field the user has edited.
    pub fn touched(valid: bool) -> Self {
        Self {
            valid,
            pristine: false,
        }
    }

    /// Whether the view should mark this field as erroneous: invalid and
    /// no longer pristine.  An untouched empty field stays unmarked.
    pub fn show_error(&self) -> bool {
        !self.valid && !self.pristine
    }
}

/// Reported state of the owner create form.
///
/// First and last name are required; the email is optional, so a blank
/// email field is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerForm {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub email: FieldState,
}

impl OwnerForm {
    pub fn valid(&self) -> bool {
        self.first_name.valid && self.last_name.valid && self.email.valid
    }

    /// A form whose every field has been filled in validly.
    pub fn completed() -> Self {
        Self {
            first_name: FieldState::touched(true),
            last_name: FieldState::touched(true),
            email: FieldState::touched(true),
        }
    }
}

impl Default for OwnerForm {
    fn default() -> Self {
        Self {
            first_name: FieldState::untouched(false),
            last_name: FieldState::untouched(false),
            email: FieldState::untouched(true),
        }
    }
}

/// Reported state of the horse create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorseForm {
    pub name: FieldState,
    pub date_of_birth: FieldState,
    pub sex: FieldState,
}

impl HorseForm {
    pub fn valid(&self) -> bool {
        self.name.valid && self.date_of_birth.valid && self.sex.valid
    }

    /// A form whose every field has been filled in validly.
    pub fn completed() -> Self {
        Self {
            name: FieldState::touched(true),
            date_of_birth: FieldState::touched(true),
            sex: FieldState::touched(true),
        }
    }
}

impl Default for HorseForm {
    fn default() -> Self {
        Self {
            name: FieldState::untouched(false),
            // The form initialises the birth date and sex to defaults, so
            // they are valid before the user touches them.
            date_of_birth: FieldState::untouched(true),
            sex: FieldState::untouched(true),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
