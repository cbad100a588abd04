//! Human readable names.

use heck::ToTitleCase;

use crate::{Category, Identity, Member};

/// Title-case a snake-case id: `dark_oak_log` becomes `Dark Oak Log`.
#[must_use]
pub fn format_id(id: &str) -> String {
    id.to_title_case()
}

impl Identity {
    #[must_use]
    pub fn display_name(&self) -> String {
        format_id(self.key())
    }
}

impl<T: Member> Category<T> {
    #[must_use]
    pub fn display_name(&self) -> String {
        format_id(self.id())
    }
}
