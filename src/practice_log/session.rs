//! Session controller for the practice log editor.
//!
//! One `PracticeLogForm` owns the state of one editing modal: the menu list,
//! the time sub-editor binding, and the lifecycle that decides when state is
//! derived fresh versus left alone. The lifecycle is explicit: `sync` may be
//! called arbitrarily often with the container's current `(is_open,
//! edit_data)` pair, and only a genuine target change re-derives anything.
//!
//! Every operation is total. Unknown menu ids, a missing sub-editor binding,
//! and a refused removal all degrade to logged no-ops rather than errors.

use std::fmt;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::init::{default_menu, menu_from_edit_data, menu_from_template};
use super::submit::prepare_submit_data;
use super::types::{
    MenuUpdate, PracticeLogEditData, PracticeLogSubmitData, PracticeLogTemplate, PracticeMenu,
    Tag, TimeEditorRequest, TimeEntry,
};

/// Identifies which target a session was initialized for.
///
/// Derived from the edit record's id when one is supplied. A record with no
/// id and a brand-new entry share the same sentinel key, matching how the
/// web client has always keyed its sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionKey {
    /// New entry, nothing to edit.
    New,
    /// Editing the historical entry with this id.
    Edit(String),
}

impl SessionKey {
    pub fn from_edit_data(edit: Option<&PracticeLogEditData>) -> SessionKey {
        match edit.and_then(|e| e.id.clone()) {
            Some(id) => SessionKey::Edit(id),
            None => SessionKey::New,
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKey::New => f.write_str("__new__"),
            SessionKey::Edit(id) => f.write_str(id),
        }
    }
}

/// Where the session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormLifecycle {
    /// No editor open. The next open fully re-derives state.
    Closed,
    /// Open and initialized for `key`. Repeat syncs with the same key must
    /// not clobber in-progress edits.
    Ready { key: SessionKey },
}

/// The binding created by `open_time_editor`: which menu the sub-editor's
/// save will land on. Rebound with a fresh generation on every open, so a
/// retarget is observable; `save_times` consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEditor {
    menu_id: String,
    generation: u64,
}

impl TimeEditor {
    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Millisecond wall-clock id source, matching the ids the web client has
/// always produced. A suffix disambiguates calls landing on one millisecond,
/// so ids never collide within a session.
#[derive(Debug)]
struct MenuIdGen {
    last_millis: i64,
    suffix: u32,
}

impl MenuIdGen {
    fn new() -> Self {
        MenuIdGen {
            last_millis: 0,
            suffix: 0,
        }
    }

    fn next(&mut self) -> String {
        let millis = Utc::now().timestamp_millis();
        if millis <= self.last_millis {
            self.suffix += 1;
            return format!("{}-{}", self.last_millis, self.suffix);
        }
        self.last_millis = millis;
        self.suffix = 0;
        millis.to_string()
    }
}

/// State for one practice log editing session.
#[derive(Debug)]
pub struct PracticeLogForm {
    lifecycle: FormLifecycle,
    menus: Vec<PracticeMenu>,
    /// Snapshot taken at initialization; backs unsaved-change detection.
    baseline: Vec<PracticeMenu>,
    time_editor: Option<TimeEditor>,
    submitted: bool,
    id_gen: MenuIdGen,
    editor_generation: u64,
}

impl PracticeLogForm {
    pub fn new() -> Self {
        let menus = vec![default_menu("1")];
        PracticeLogForm {
            lifecycle: FormLifecycle::Closed,
            baseline: menus.clone(),
            menus,
            time_editor: None,
            submitted: false,
            id_gen: MenuIdGen::new(),
            editor_generation: 0,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Reconciles the session against the container's current props.
    ///
    /// Closing drops the tracked key, so the next open re-derives from
    /// scratch even for the same record. Opening derives the menu list once
    /// per distinct session key: from the edit record when one is supplied,
    /// else a single blank menu. Re-invocation with an unchanged key while
    /// open leaves all in-progress edits alone.
    pub fn sync(
        &mut self,
        is_open: bool,
        edit_data: Option<&PracticeLogEditData>,
        available_tags: &[Tag],
    ) {
        if !is_open {
            if self.lifecycle != FormLifecycle::Closed {
                info!("Practice log session closed");
                self.lifecycle = FormLifecycle::Closed;
                self.submitted = false;
            }
            return;
        }

        let key = SessionKey::from_edit_data(edit_data);
        if let FormLifecycle::Ready { key: current } = &self.lifecycle {
            if *current == key {
                return;
            }
        }

        self.menus = match edit_data {
            Some(edit) => vec![menu_from_edit_data(edit, available_tags)],
            None => vec![default_menu("1")],
        };
        self.baseline = self.menus.clone();
        self.time_editor = None;
        self.submitted = false;
        info!("Practice log session initialized for '{}'", key);
        self.lifecycle = FormLifecycle::Ready { key };
    }

    pub fn lifecycle(&self) -> &FormLifecycle {
        &self.lifecycle
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lifecycle, FormLifecycle::Ready { .. })
    }

    // =========================================================================
    // Menu list operations
    // =========================================================================

    pub fn menus(&self) -> &[PracticeMenu] {
        &self.menus
    }

    /// Appends a blank menu under a freshly generated id and returns the id.
    pub fn add_menu(&mut self) -> String {
        let id = self.id_gen.next();
        debug!("Added menu '{}'", id);
        self.menus.push(default_menu(id.clone()));
        id
    }

    /// Removes the matching menu. The last remaining menu is never removed,
    /// and an unknown id changes nothing.
    pub fn remove_menu(&mut self, id: &str) {
        if self.menus.len() <= 1 {
            warn!("Refusing to remove the last menu");
            return;
        }
        match self.menus.iter().position(|menu| menu.id == id) {
            Some(index) => {
                self.menus.remove(index);
                debug!("Removed menu '{}'", id);
            }
            None => debug!("Remove for unknown menu '{}' ignored", id),
        }
    }

    /// Replaces exactly one field on the matching menu, storing the value
    /// as-is. Raw text on numeric fields, the empty string included, is kept
    /// verbatim until submission.
    pub fn update_menu(&mut self, id: &str, update: MenuUpdate) {
        let menu = match self.menus.iter_mut().find(|menu| menu.id == id) {
            Some(menu) => menu,
            None => {
                debug!("Update for unknown menu '{}' ignored", id);
                return;
            }
        };
        debug!("Set '{}' on menu '{}'", update.field(), id);
        match update {
            MenuUpdate::Style(value) => menu.style = value,
            MenuUpdate::SwimCategory(value) => menu.swim_category = value,
            MenuUpdate::Distance(value) => menu.distance = value,
            MenuUpdate::Reps(value) => menu.reps = value,
            MenuUpdate::Sets(value) => menu.sets = value,
            MenuUpdate::CircleMin(value) => menu.circle_min = value,
            MenuUpdate::CircleSec(value) => menu.circle_sec = value,
            MenuUpdate::Note(value) => menu.note = value,
            MenuUpdate::Tags(value) => menu.tags = value,
        }
    }

    /// Wholesale tag replacement for one menu (never merged, never diffed).
    pub fn set_tags(&mut self, menu_id: &str, tags: Vec<Tag>) {
        self.update_menu(menu_id, MenuUpdate::Tags(tags));
    }

    /// Swaps the entire menu list, as the preset flows do. An empty
    /// replacement is refused so the list keeps at least one menu.
    pub fn replace_menus(&mut self, menus: Vec<PracticeMenu>) {
        if menus.is_empty() {
            warn!("Ignoring replacement with an empty menu list");
            return;
        }
        info!("Replaced menu list ({} menus)", menus.len());
        self.menus = menus;
    }

    /// Materializes a catalog template as a single menu and replaces the
    /// whole list with it.
    pub fn apply_template(&mut self, template: &PracticeLogTemplate, available_tags: &[Tag]) {
        let id = self.id_gen.next();
        info!("Applying template '{}' ({})", template.name, template.id);
        let menu = menu_from_template(template, available_tags, id);
        self.replace_menus(vec![menu]);
    }

    // =========================================================================
    // Time sub-editor
    // =========================================================================

    /// Binds `menu_id` as the save target and shows the sub-editor. Every
    /// call produces a fresh binding.
    pub fn open_time_editor(&mut self, menu_id: &str) {
        self.editor_generation += 1;
        debug!(
            "Opened time editor for menu '{}' (binding {})",
            menu_id, self.editor_generation
        );
        self.time_editor = Some(TimeEditor {
            menu_id: menu_id.to_string(),
            generation: self.editor_generation,
        });
    }

    pub fn time_editor(&self) -> Option<&TimeEditor> {
        self.time_editor.as_ref()
    }

    pub fn time_editor_visible(&self) -> bool {
        self.time_editor.is_some()
    }

    /// The menu currently bound as the save target.
    pub fn current_menu(&self) -> Option<&PracticeMenu> {
        let editor = self.time_editor.as_ref()?;
        self.menus.iter().find(|menu| menu.id == editor.menu_id)
    }

    /// Everything the sub-editor needs to open for the bound menu.
    pub fn time_editor_request(&self) -> Option<TimeEditorRequest> {
        let editor = self.time_editor.as_ref()?;
        let (index, menu) = self
            .menus
            .iter()
            .enumerate()
            .find(|(_, menu)| menu.id == editor.menu_id)?;
        Some(TimeEditorRequest {
            set_count: menu.sets.or_default(1),
            rep_count: menu.reps.or_default(1),
            initial_times: menu.times.clone(),
            menu_number: index + 1,
        })
    }

    /// Overwrites the bound menu's times with the sub-editor's result, then
    /// drops the binding and hides the editor. With no binding this is a
    /// no-op; this is the only path that changes `times` after
    /// initialization.
    pub fn save_times(&mut self, times: Vec<TimeEntry>) {
        let editor = match self.time_editor.take() {
            Some(editor) => editor,
            None => {
                debug!("Time save with no bound target ignored");
                return;
            }
        };
        match self.menus.iter_mut().find(|menu| menu.id == editor.menu_id) {
            Some(menu) => {
                info!("Saved {} times onto menu '{}'", times.len(), editor.menu_id);
                menu.times = times;
            }
            None => warn!("Time editor target '{}' no longer exists", editor.menu_id),
        }
    }

    /// Drops the binding without saving (the sub-editor's dismiss path).
    pub fn cancel_time_editor(&mut self) {
        if self.time_editor.take().is_some() {
            debug!("Time editor dismissed without saving");
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Projects the live menu list into transport records.
    pub fn prepare_submit_data(&self) -> Vec<PracticeLogSubmitData> {
        prepare_submit_data(&self.menus)
    }

    /// True while the open session's menus differ from the snapshot taken at
    /// initialization. A closed session never reports unsaved changes.
    pub fn has_unsaved_changes(&self) -> bool {
        self.is_open() && self.menus != self.baseline
    }

    /// Re-snapshots the current menus, dropping the dirty flag without
    /// losing edit state. Called after the consumer persists a submission.
    pub fn mark_clean(&mut self) {
        self.baseline = self.menus.clone();
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}

impl Default for PracticeLogForm {
    fn default() -> Self {
        PracticeLogForm::new()
    }
}
