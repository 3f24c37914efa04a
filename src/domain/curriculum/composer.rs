//! Topic composer state.
//!
//! Program, unit and chapter selections cascade: changing a level clears
//! everything below it. List fetches are tagged with a per-level generation
//! so a response for a selection that has since changed is dropped.

use crate::domain::foundation::{ChapterId, ProgramId, UnitId};

use super::{
    CatalogItem, ComposerError, ContentType, NewChapter, NewUnit, TopicContent, TopicDraft,
    TopicType,
};

/// Monotonic tag identifying one list fetch.
pub type Generation = u64;

/// Inline "+ Add" sub-form under a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineCreate {
    pub open: bool,
    pub name: String,
    pub pending: bool,
}

impl InlineCreate {
    fn cancel(&mut self) {
        *self = InlineCreate::default();
    }
}

/// Editable topic fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicFields {
    pub name: String,
    pub topic_type: Option<TopicType>,
    pub duration: String,
    pub order_index: u32,
    pub content: TopicContent,
}

impl Default for TopicFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            topic_type: Some(TopicType::Video),
            duration: String::new(),
            order_index: 0,
            content: TopicContent::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposerState {
    pub is_open: bool,
    pub programs: Vec<CatalogItem<ProgramId>>,
    pub units: Vec<CatalogItem<UnitId>>,
    pub chapters: Vec<CatalogItem<ChapterId>>,
    pub selected_program: Option<ProgramId>,
    pub selected_unit: Option<UnitId>,
    pub selected_chapter: Option<ChapterId>,
    pub fields: TopicFields,
    pub unit_form: InlineCreate,
    pub chapter_form: InlineCreate,
    pub submitting: bool,
    program_generation: Generation,
    unit_generation: Generation,
    chapter_generation: Generation,
}

impl ComposerState {
    /// Opens a blank composer. Returns the tag for the program list fetch.
    pub fn open(&mut self) -> Generation {
        let next = self.program_generation + 1;
        *self = ComposerState {
            is_open: true,
            program_generation: next,
            unit_generation: self.unit_generation + 1,
            chapter_generation: self.chapter_generation + 1,
            ..ComposerState::default()
        };
        next
    }

    /// Closes and discards everything; in-flight responses become stale.
    pub fn close(&mut self) {
        *self = ComposerState {
            program_generation: self.program_generation + 1,
            unit_generation: self.unit_generation + 1,
            chapter_generation: self.chapter_generation + 1,
            ..ComposerState::default()
        };
    }

    pub fn apply_programs(
        &mut self,
        generation: Generation,
        programs: Vec<CatalogItem<ProgramId>>,
    ) -> bool {
        if !self.is_open || generation != self.program_generation {
            return false;
        }
        self.programs = programs;
        true
    }

    /// Selects a program. Returns the tag for the unit list fetch.
    pub fn select_program(&mut self, id: ProgramId) -> Generation {
        self.selected_program = Some(id);
        self.units.clear();
        self.unit_form.cancel();
        self.unit_generation += 1;
        self.clear_unit_level();
        self.unit_generation
    }

    pub fn apply_units(&mut self, generation: Generation, units: Vec<CatalogItem<UnitId>>) -> bool {
        if !self.is_open || generation != self.unit_generation {
            return false;
        }
        self.units = units;
        true
    }

    /// Selects a unit. Returns the tag for the chapter list fetch.
    pub fn select_unit(&mut self, id: UnitId) -> Generation {
        self.selected_unit = Some(id);
        self.chapters.clear();
        self.selected_chapter = None;
        self.chapter_form.cancel();
        self.chapter_generation += 1;
        self.chapter_generation
    }

    pub fn apply_chapters(
        &mut self,
        generation: Generation,
        chapters: Vec<CatalogItem<ChapterId>>,
    ) -> bool {
        if !self.is_open || generation != self.chapter_generation {
            return false;
        }
        self.chapters = chapters;
        true
    }

    pub fn select_chapter(&mut self, id: ChapterId) {
        self.selected_chapter = Some(id);
    }

    fn clear_unit_level(&mut self) {
        self.selected_unit = None;
        self.chapters.clear();
        self.selected_chapter = None;
        self.chapter_form.cancel();
        self.chapter_generation += 1;
    }

    // ─── Topic fields ─────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_type(&mut self, topic_type: Option<TopicType>) {
        self.fields.topic_type = topic_type;
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.fields.duration = duration.into();
    }

    pub fn set_order_index(&mut self, order_index: u32) {
        self.fields.order_index = order_index;
    }

    pub fn set_content_type(&mut self, kind: ContentType) {
        self.fields.content.switch_to(kind);
    }

    /// Replaces the payload, e.g. after editing one of its fields.
    pub fn set_content(&mut self, content: TopicContent) {
        self.fields.content = content;
    }

    pub fn attach_upload(&mut self, url: impl Into<String>) -> Result<(), ComposerError> {
        self.fields.content.attach_url(url)
    }

    // ─── Inline creation ─────────────────────────────────────────────────

    pub fn open_unit_form(&mut self) -> bool {
        if self.selected_program.is_none() {
            return false;
        }
        self.unit_form.open = true;
        true
    }

    pub fn set_new_unit_name(&mut self, name: impl Into<String>) {
        self.unit_form.name = name.into();
    }

    pub fn cancel_unit_form(&mut self) {
        self.unit_form.cancel();
    }

    /// Builds the create-unit body and marks the sub-form pending.
    ///
    /// Returns the unit-level tag current at request time.
    pub fn begin_create_unit(&mut self) -> Result<(NewUnit, Generation), ComposerError> {
        let program = self
            .selected_program
            .ok_or(ComposerError::MissingParent("program"))?;
        if self.unit_form.pending {
            return Err(ComposerError::Busy);
        }
        let name = self.unit_form.name.trim();
        if name.is_empty() {
            return Err(ComposerError::BlankName);
        }
        let body = NewUnit::new(name, self.units.len() as u32, program);
        self.unit_form.pending = true;
        Ok((body, self.unit_generation))
    }

    /// Appends and selects the created unit. Returns the chapter fetch tag.
    pub fn finish_create_unit(
        &mut self,
        generation: Generation,
        unit: CatalogItem<UnitId>,
    ) -> Result<Generation, ComposerError> {
        if !self.is_open || generation != self.unit_generation {
            return Err(ComposerError::Stale);
        }
        let id = unit.id.clone();
        self.units.push(unit);
        self.unit_form.cancel();
        Ok(self.select_unit(id))
    }

    /// Leaves the sub-form open with its name so the user can retry.
    pub fn fail_create_unit(&mut self) {
        self.unit_form.pending = false;
    }

    pub fn open_chapter_form(&mut self) -> bool {
        if self.selected_unit.is_none() {
            return false;
        }
        self.chapter_form.open = true;
        true
    }

    pub fn set_new_chapter_name(&mut self, name: impl Into<String>) {
        self.chapter_form.name = name.into();
    }

    pub fn cancel_chapter_form(&mut self) {
        self.chapter_form.cancel();
    }

    pub fn begin_create_chapter(&mut self) -> Result<(NewChapter, Generation), ComposerError> {
        let unit = self
            .selected_unit
            .clone()
            .ok_or(ComposerError::MissingParent("unit"))?;
        if self.chapter_form.pending {
            return Err(ComposerError::Busy);
        }
        let name = self.chapter_form.name.trim();
        if name.is_empty() {
            return Err(ComposerError::BlankName);
        }
        let body = NewChapter {
            name: name.to_string(),
            order_index: self.chapters.len() as u32,
            subject_id: unit,
        };
        self.chapter_form.pending = true;
        Ok((body, self.chapter_generation))
    }

    pub fn finish_create_chapter(
        &mut self,
        generation: Generation,
        chapter: CatalogItem<ChapterId>,
    ) -> Result<(), ComposerError> {
        if !self.is_open || generation != self.chapter_generation {
            return Err(ComposerError::Stale);
        }
        self.selected_chapter = Some(chapter.id.clone());
        self.chapters.push(chapter);
        self.chapter_form.cancel();
        Ok(())
    }

    pub fn fail_create_chapter(&mut self) {
        self.chapter_form.pending = false;
    }

    // ─── Submission ──────────────────────────────────────────────────────

    /// Whether the "Add Topic" action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.missing_field().is_none()
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.selected_program.is_none() {
            Some("program")
        } else if self.selected_unit.is_none() {
            Some("unit")
        } else if self.selected_chapter.is_none() {
            Some("chapter")
        } else if self.fields.name.trim().is_empty() {
            Some("name")
        } else if self.fields.topic_type.is_none() {
            Some("type")
        } else if self.fields.duration.trim().is_empty() {
            Some("duration")
        } else {
            None
        }
    }

    /// Validates the form and returns the draft to post.
    pub fn draft(&self) -> Result<TopicDraft, ComposerError> {
        if !self.is_open {
            return Err(ComposerError::Closed);
        }
        if let Some(field) = self.missing_field() {
            return Err(ComposerError::Incomplete(field));
        }
        self.fields.content.validate()?;

        match (&self.selected_chapter, self.fields.topic_type) {
            (Some(chapter_id), Some(topic_type)) => Ok(TopicDraft {
                name: self.fields.name.trim().to_string(),
                topic_type,
                duration: self.fields.duration.trim().to_string(),
                order_index: self.fields.order_index,
                chapter_id: chapter_id.clone(),
                content: self.fields.content.clone(),
            }),
            (None, _) => Err(ComposerError::Incomplete("chapter")),
            (_, None) => Err(ComposerError::Incomplete("type")),
        }
    }

    pub fn begin_submit(&mut self) -> Result<TopicDraft, ComposerError> {
        if self.submitting {
            return Err(ComposerError::Busy);
        }
        let draft = self.draft()?;
        self.submitting = true;
        Ok(draft)
    }

    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str) -> CatalogItem<UnitId> {
        CatalogItem {
            id: UnitId::new(id).unwrap(),
            name: id.to_uppercase(),
        }
    }

    fn chapter(id: &str) -> CatalogItem<ChapterId> {
        CatalogItem {
            id: ChapterId::new(id).unwrap(),
            name: id.to_uppercase(),
        }
    }

    fn filled() -> ComposerState {
        let mut state = ComposerState::default();
        state.open();
        let g = state.select_program(ProgramId::new(1));
        state.apply_units(g, vec![unit("u1")]);
        let g = state.select_unit(UnitId::new("u1").unwrap());
        state.apply_chapters(g, vec![chapter("c1")]);
        state.select_chapter(ChapterId::new("c1").unwrap());
        state.set_name("Grace");
        state.set_duration("15 min");
        state
    }

    #[test]
    fn submit_enabled_only_when_all_fields_present() {
        let mut state = ComposerState::default();
        state.open();
        assert!(!state.can_submit());

        let mut state = filled();
        assert!(state.can_submit());

        state.set_name("   ");
        assert!(!state.can_submit());
        state.set_name("Grace");

        state.set_type(None);
        assert!(!state.can_submit());
        state.set_type(Some(TopicType::Audio));

        state.set_duration("");
        assert!(!state.can_submit());
        state.set_duration("10 min");
        assert!(state.can_submit());
    }

    #[test]
    fn selecting_program_clears_lower_levels() {
        let mut state = filled();
        state.select_program(ProgramId::new(2));
        assert!(state.units.is_empty());
        assert!(state.chapters.is_empty());
        assert_eq!(state.selected_unit, None);
        assert_eq!(state.selected_chapter, None);
        assert!(!state.can_submit());
    }

    #[test]
    fn selecting_unit_clears_chapter_level() {
        let mut state = filled();
        state.select_unit(UnitId::new("u2").unwrap());
        assert!(state.chapters.is_empty());
        assert_eq!(state.selected_chapter, None);
    }

    #[test]
    fn stale_unit_list_is_dropped() {
        let mut state = ComposerState::default();
        state.open();
        let first = state.select_program(ProgramId::new(1));
        let second = state.select_program(ProgramId::new(2));

        assert!(!state.apply_units(first, vec![unit("old")]));
        assert!(state.units.is_empty());
        assert!(state.apply_units(second, vec![unit("new")]));
        assert_eq!(state.units[0].name, "NEW");
    }

    #[test]
    fn responses_after_close_are_dropped() {
        let mut state = ComposerState::default();
        let g = state.open();
        state.close();
        assert!(!state.apply_programs(g, vec![]));
        assert!(!state.is_open);
    }

    #[test]
    fn inline_unit_creation_appends_and_selects() {
        let mut state = filled();
        assert!(state.open_unit_form());
        state.set_new_unit_name("  Prophets ");

        let (body, g) = state.begin_create_unit().unwrap();
        assert_eq!(body.name, "Prophets");
        assert_eq!(body.order_index, 1);
        assert_eq!(body.class_id, ProgramId::new(1));
        assert!(state.begin_create_unit().is_err());

        let created = CatalogItem {
            id: body.id.clone(),
            name: body.name.clone(),
        };
        state.finish_create_unit(g, created).unwrap();
        assert_eq!(state.units.len(), 2);
        assert_eq!(state.selected_unit, Some(body.id));
        assert_eq!(state.selected_chapter, None);
        assert_eq!(state.unit_form, InlineCreate::default());
    }

    #[test]
    fn failed_unit_creation_keeps_form_open() {
        let mut state = filled();
        state.open_unit_form();
        state.set_new_unit_name("Prophets");
        state.begin_create_unit().unwrap();
        state.fail_create_unit();

        assert!(state.unit_form.open);
        assert_eq!(state.unit_form.name, "Prophets");
        assert!(!state.unit_form.pending);
        assert_eq!(state.units.len(), 1);
    }

    #[test]
    fn unit_creation_requires_program_and_name() {
        let mut state = ComposerState::default();
        state.open();
        assert!(!state.open_unit_form());
        assert_eq!(
            state.begin_create_unit().unwrap_err(),
            ComposerError::MissingParent("program")
        );

        state.select_program(ProgramId::new(1));
        assert_eq!(state.begin_create_unit().unwrap_err(), ComposerError::BlankName);
    }

    #[test]
    fn created_unit_for_old_program_is_stale() {
        let mut state = filled();
        state.open_unit_form();
        state.set_new_unit_name("Prophets");
        let (body, g) = state.begin_create_unit().unwrap();
        state.select_program(ProgramId::new(2));

        let created = CatalogItem {
            id: body.id,
            name: body.name,
        };
        assert_eq!(state.finish_create_unit(g, created), Err(ComposerError::Stale));
        assert!(state.units.is_empty());
    }

    #[test]
    fn inline_chapter_creation() {
        let mut state = filled();
        assert!(state.open_chapter_form());
        state.set_new_chapter_name("Wisdom");
        let (body, g) = state.begin_create_chapter().unwrap();
        assert_eq!(body.order_index, 1);
        assert_eq!(body.subject_id.as_str(), "u1");

        state.finish_create_chapter(g, chapter("c2")).unwrap();
        assert_eq!(state.selected_chapter, Some(ChapterId::new("c2").unwrap()));
        assert_eq!(state.chapters.len(), 2);
    }

    #[test]
    fn cancel_clears_pending_name() {
        let mut state = filled();
        state.open_chapter_form();
        state.set_new_chapter_name("Wisdom");
        state.cancel_chapter_form();
        assert_eq!(state.chapter_form, InlineCreate::default());
    }

    #[test]
    fn draft_rejects_bad_iframe() {
        let mut state = filled();
        state.set_content(TopicContent::Iframe {
            iframe_html: "<video/>".into(),
        });
        assert_eq!(state.draft(), Err(ComposerError::InvalidIframe));
    }

    #[test]
    fn draft_carries_chapter_and_trimmed_fields() {
        let mut state = filled();
        state.set_name("  Grace ");
        state.set_order_index(3);
        let draft = state.draft().unwrap();
        assert_eq!(draft.name, "Grace");
        assert_eq!(draft.order_index, 3);
        assert_eq!(draft.chapter_id.as_str(), "c1");
        assert_eq!(draft.topic_type, TopicType::Video);
    }

    #[test]
    fn submit_is_not_reentrant() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(ComposerError::Busy));
        state.fail_submit();
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn reopen_resets_everything() {
        let mut state = filled();
        state.open();
        assert_eq!(state.selected_program, None);
        assert_eq!(state.fields, TopicFields::default());
    }
}
