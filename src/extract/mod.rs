// src/extract/mod.rs
//! Section lookup per document type.
//!
//! Extractors return `None` when a section is absent; builders pick the
//! default. The first matching section in document order wins.

pub mod career_history;
pub mod career_plan;
pub mod recommendation;

use crate::types::Section;

pub(crate) fn first<'a, B, T>(
    sections: &'a [Section<B>],
    pick: impl FnMut(&'a B) -> Option<T>,
) -> Option<T> {
    sections.iter().map(|section| &section.body).find_map(pick)
}
