//! Add-entity modals

use std::fmt;

use crate::models::{DraftField, NewEntityDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalField {
    pub field: DraftField,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    pub fields: Vec<ModalField>,
}

impl ModalView {
    fn build(title: &'static str, fields: &[DraftField], draft: &NewEntityDraft) -> Self {
        Self {
            title,
            fields: fields
                .iter()
                .map(|&field| ModalField {
                    field,
                    value: draft.value(field),
                })
                .collect(),
        }
    }
}

/// Book form; nothing when closed
pub fn book_modal(open: bool, draft: &NewEntityDraft) -> Option<ModalView> {
    open.then(|| ModalView::build("Add Book", &DraftField::BOOK_FIELDS, draft))
}

/// User form; nothing when closed
pub fn user_modal(open: bool, draft: &NewEntityDraft) -> Option<ModalView> {
    open.then(|| ModalView::build("Add User", &DraftField::USER_FIELDS, draft))
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for entry in &self.fields {
            match &entry.value {
                Some(value) => writeln!(f, "  {}: {}", entry.field.label(), value)?,
                None => writeln!(f, "  {}: ({})", entry.field.label(), entry.field.placeholder())?,
            }
        }
        writeln!(f, "  save | cancel")
    }
}
