use serde::Serialize;
use tauri::State;
use tracing::info;

use swimhub::practice_log::{
    MenuUpdate, PracticeLogEditData, PracticeLogForm, PracticeLogSubmitData, PracticeLogTemplate,
    PracticeMenu, Tag, TimeEditorRequest, TimeEntry,
};

use crate::state::PracticeLogState;

/// The form state as the frontend renders it, captured after each command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub menus: Vec<PracticeMenu>,
    pub show_time_modal: bool,
    pub current_menu_id: Option<String>,
    pub has_unsaved_changes: bool,
    pub is_submitted: bool,
    pub is_open: bool,
}

impl FormSnapshot {
    fn capture(form: &PracticeLogForm) -> Self {
        Self {
            menus: form.menus().to_vec(),
            show_time_modal: form.time_editor_visible(),
            current_menu_id: form.time_editor().map(|e| e.menu_id().to_string()),
            has_unsaved_changes: form.has_unsaved_changes(),
            is_submitted: form.is_submitted(),
            is_open: form.is_open(),
        }
    }
}

/// Reconcile the session against the modal's open state and edit target.
/// Safe to call on every render; only a genuine target change re-derives.
#[tauri::command]
pub fn sync_practice_log(
    state: State<'_, PracticeLogState>,
    is_open: bool,
    edit_data: Option<PracticeLogEditData>,
    available_tags: Vec<Tag>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.sync(is_open, edit_data.as_ref(), &available_tags);
    Ok(FormSnapshot::capture(&form))
}

/// Append a blank menu.
#[tauri::command]
pub fn add_practice_menu(state: State<'_, PracticeLogState>) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.add_menu();
    Ok(FormSnapshot::capture(&form))
}

/// Remove one menu; the last remaining menu stays put.
#[tauri::command]
pub fn remove_practice_menu(
    state: State<'_, PracticeLogState>,
    id: String,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.remove_menu(&id);
    Ok(FormSnapshot::capture(&form))
}

/// Replace a single field on one menu.
#[tauri::command]
pub fn update_practice_menu(
    state: State<'_, PracticeLogState>,
    id: String,
    update: MenuUpdate,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.update_menu(&id, update);
    Ok(FormSnapshot::capture(&form))
}

/// Replace one menu's tag list wholesale.
#[tauri::command]
pub fn set_practice_menu_tags(
    state: State<'_, PracticeLogState>,
    id: String,
    tags: Vec<Tag>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.set_tags(&id, tags);
    Ok(FormSnapshot::capture(&form))
}

/// Bind a menu as the time sub-editor's save target and show the editor.
#[tauri::command]
pub fn open_practice_time_editor(
    state: State<'_, PracticeLogState>,
    id: String,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.open_time_editor(&id);
    Ok(FormSnapshot::capture(&form))
}

/// What the time sub-editor should open with, if a target is bound.
#[tauri::command]
pub fn practice_time_editor_request(
    state: State<'_, PracticeLogState>,
) -> Result<Option<TimeEditorRequest>, String> {
    let form = state.lock()?;
    Ok(form.time_editor_request())
}

/// The menu currently bound as the save target.
#[tauri::command]
pub fn current_practice_menu(
    state: State<'_, PracticeLogState>,
) -> Result<Option<PracticeMenu>, String> {
    let form = state.lock()?;
    Ok(form.current_menu().cloned())
}

/// Land the sub-editor's result on the bound menu and hide the editor.
#[tauri::command]
pub fn save_practice_times(
    state: State<'_, PracticeLogState>,
    times: Vec<TimeEntry>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.save_times(times);
    Ok(FormSnapshot::capture(&form))
}

/// Dismiss the sub-editor without saving.
#[tauri::command]
pub fn cancel_practice_time_editor(
    state: State<'_, PracticeLogState>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.cancel_time_editor();
    Ok(FormSnapshot::capture(&form))
}

/// Materialize a catalog template as a single menu, replacing the list.
#[tauri::command]
pub fn apply_practice_template(
    state: State<'_, PracticeLogState>,
    template: PracticeLogTemplate,
    available_tags: Vec<Tag>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.apply_template(&template, &available_tags);
    Ok(FormSnapshot::capture(&form))
}

/// Swap the entire menu list (preset flows).
#[tauri::command]
pub fn replace_practice_menus(
    state: State<'_, PracticeLogState>,
    menus: Vec<PracticeMenu>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.replace_menus(menus);
    Ok(FormSnapshot::capture(&form))
}

/// Project the current menus into transport records. Persistence belongs to
/// the frontend; this only assembles the payload.
#[tauri::command]
pub fn prepare_practice_submit(
    state: State<'_, PracticeLogState>,
) -> Result<Vec<PracticeLogSubmitData>, String> {
    let form = state.lock()?;
    let payload = form.prepare_submit_data();
    info!("Assembled submit payload with {} records", payload.len());
    Ok(payload)
}

/// Acknowledge a completed submission: drop the dirty flag, mark submitted.
#[tauri::command]
pub fn mark_practice_submitted(
    state: State<'_, PracticeLogState>,
) -> Result<FormSnapshot, String> {
    let mut form = state.lock()?;
    form.mark_clean();
    form.set_submitted(true);
    Ok(FormSnapshot::capture(&form))
}

/// Current state without mutating anything.
#[tauri::command]
pub fn practice_form_snapshot(
    state: State<'_, PracticeLogState>,
) -> Result<FormSnapshot, String> {
    let form = state.lock()?;
    Ok(FormSnapshot::capture(&form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_the_editor_binding() {
        let mut form = PracticeLogForm::new();
        form.sync(true, None, &[]);
        form.open_time_editor("1");

        let snapshot = FormSnapshot::capture(&form);
        assert!(snapshot.show_time_modal);
        assert_eq!(snapshot.current_menu_id.as_deref(), Some("1"));
        assert!(snapshot.is_open);
        assert!(!snapshot.is_submitted);
    }

    #[test]
    fn test_snapshot_serializes_the_frontend_field_names() {
        let form = PracticeLogForm::new();
        let value = serde_json::to_value(FormSnapshot::capture(&form)).expect("serialize");
        let obj = value.as_object().expect("snapshot is an object");
        for key in [
            "menus",
            "showTimeModal",
            "currentMenuId",
            "hasUnsavedChanges",
            "isSubmitted",
            "isOpen",
        ] {
            assert!(obj.contains_key(key), "missing key '{}'", key);
        }
        assert_eq!(value["currentMenuId"], serde_json::Value::Null);
    }
}
