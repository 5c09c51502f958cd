//! Menu derivation for session start.
//!
//! Everything here is a pure function: blank defaults, the decomposition of
//! a total-seconds circle into the split minute/second fields, flattening of
//! per-member time groups, and the projection of external records (historical
//! entries, catalog templates) into editable menus.

use tracing::debug;

use super::types::{
    MemberTimes, PracticeLogEditData, PracticeLogTemplate, PracticeMenu, Tag, TimeEntry,
};

/// Builds the blank menu every new session starts from: freestyle swim,
/// 100m x 4 reps x 1 set on a 1:30 circle, nothing else filled in.
pub fn default_menu(id: impl Into<String>) -> PracticeMenu {
    PracticeMenu {
        id: id.into(),
        style: "Fr".to_string(),
        swim_category: Default::default(),
        distance: 100.into(),
        reps: 4.into(),
        sets: 1.into(),
        circle_min: 1.into(),
        circle_sec: 30.into(),
        note: String::new(),
        tags: Vec::new(),
        times: Vec::new(),
    }
}

/// Splits a total-seconds circle into the `(minutes, seconds)` pair the two
/// input fields hold. A null circle is zero, so both fields read 0.
pub fn split_circle(total_seconds: Option<u32>) -> (u32, u32) {
    let seconds = total_seconds.unwrap_or(0);
    (seconds / 60, seconds % 60)
}

/// Concatenates every member group's entries in group order, discarding the
/// member identity entirely. The single-session editor has no notion of
/// which member a split belongs to. Absent groups flatten to an empty list.
pub fn flatten_member_times(groups: &[MemberTimes]) -> Vec<TimeEntry> {
    groups
        .iter()
        .flat_map(|group| group.times.iter().cloned())
        .collect()
}

/// Projects a historical entry into one editable menu.
///
/// Fallbacks are per-field and mirror the submit-side coercion posture:
/// a missing or zero number, or a missing or empty string, reads as unset
/// and takes the blank-case default. When the record carries tag ids but no
/// resolved tags, the ids are resolved against `available_tags` (in the
/// order `available_tags` lists them; unknown ids are skipped).
pub fn menu_from_edit_data(edit: &PracticeLogEditData, available_tags: &[Tag]) -> PracticeMenu {
    let (circle_min, circle_sec) = split_circle(edit.circle);

    let tags = match edit.tags.as_deref() {
        Some(tags) if !tags.is_empty() => tags.to_vec(),
        _ => match edit.tag_ids.as_deref() {
            Some(ids) if !ids.is_empty() => resolve_tag_ids(ids, available_tags),
            _ => Vec::new(),
        },
    };

    let times = edit
        .times
        .as_deref()
        .map(flatten_member_times)
        .unwrap_or_default();

    debug!(
        "Derived menu from entry '{}' ({} times, {} tags)",
        edit.id.as_deref().unwrap_or("1"),
        times.len(),
        tags.len()
    );

    PracticeMenu {
        id: non_empty_or(edit.id.as_deref(), "1"),
        style: non_empty_or(edit.style.as_deref(), "Fr"),
        swim_category: edit.swim_category.unwrap_or_default(),
        distance: non_zero_or(edit.distance.unwrap_or(0), 100).into(),
        reps: non_zero_or(edit.rep_count.unwrap_or(0), 4).into(),
        sets: non_zero_or(edit.set_count.unwrap_or(0), 1).into(),
        circle_min: circle_min.into(),
        circle_sec: circle_sec.into(),
        note: edit.note.clone().unwrap_or_default(),
        tags,
        times,
    }
}

/// Materializes a catalog template as one editable menu. The template's note
/// is carried over; its tag ids are resolved against `available_tags`; times
/// always start empty.
pub fn menu_from_template(
    template: &PracticeLogTemplate,
    available_tags: &[Tag],
    id: impl Into<String>,
) -> PracticeMenu {
    let (circle_min, circle_sec) = split_circle(template.circle);

    PracticeMenu {
        id: id.into(),
        style: non_empty_or(Some(&template.style), "Fr"),
        swim_category: template.swim_category,
        distance: non_zero_or(template.distance, 100).into(),
        reps: non_zero_or(template.rep_count, 4).into(),
        sets: non_zero_or(template.set_count, 1).into(),
        circle_min: circle_min.into(),
        circle_sec: circle_sec.into(),
        note: template.note.clone().unwrap_or_default(),
        tags: resolve_tag_ids(&template.tag_ids, available_tags),
        times: Vec::new(),
    }
}

fn resolve_tag_ids(ids: &[String], available: &[Tag]) -> Vec<Tag> {
    available
        .iter()
        .filter(|tag| ids.contains(&tag.id))
        .cloned()
        .collect()
}

fn non_zero_or(value: u32, default: u32) -> u32 {
    if value > 0 {
        value
    } else {
        default
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}
