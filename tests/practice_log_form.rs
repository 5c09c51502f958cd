use std::path::PathBuf;

use serde_json::json;

use swimhub::practice_log::{
    MenuUpdate, NumInput, PracticeLogEditData, PracticeLogForm, PracticeLogTemplate, SwimCategory,
    Tag, TimeEntry,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_edit_record() -> PracticeLogEditData {
    let raw = std::fs::read_to_string(fixture_path("edit_record.json"))
        .expect("Failed to read fixture");
    serde_json::from_str(&raw).expect("Fixture should parse as an edit record")
}

fn make_tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        color: "#10B981".to_string(),
        user_id: "user-1".to_string(),
        created_at: "2024-04-02T08:30:00Z".to_string(),
        updated_at: "2024-04-02T08:30:00Z".to_string(),
    }
}

#[test]
fn test_new_entry_session_walkthrough() {
    let mut form = PracticeLogForm::new();
    form.sync(true, None, &[]);
    assert_eq!(form.menus().len(), 1);
    assert!(!form.has_unsaved_changes());

    // Build a second menu and edit both.
    let second = form.add_menu();
    form.update_menu("1", MenuUpdate::Style("Fly".to_string()));
    form.update_menu(&second, MenuUpdate::Distance("200".into()));
    form.update_menu(&second, MenuUpdate::CircleMin("".into()));
    form.update_menu(&second, MenuUpdate::CircleSec("".into()));
    assert!(form.has_unsaved_changes());

    // Record times through the sub-editor.
    form.open_time_editor(&second);
    let request = form.time_editor_request().expect("bound target");
    assert_eq!(request.menu_number, 2);
    form.save_times(vec![
        TimeEntry {
            set_number: 1,
            rep_number: 1,
            time: 92.4,
        },
        TimeEntry {
            set_number: 1,
            rep_number: 2,
            time: 93.0,
        },
    ]);
    assert!(!form.time_editor_visible());

    let payload = form.prepare_submit_data();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload[0].style, "Fly");
    assert_eq!(payload[0].circle_time, Some(90));
    assert_eq!(payload[1].distance, 200);
    assert_eq!(
        payload[1].circle_time, None,
        "blanked circle fields must submit as null"
    );
    assert_eq!(payload[1].times.len(), 2);

    // The consumer persisted the payload; the form acknowledges it.
    form.mark_clean();
    form.set_submitted(true);
    assert!(!form.has_unsaved_changes());
    assert!(form.is_submitted());
}

#[test]
fn test_edit_session_derives_from_the_wire_record() {
    let record = load_edit_record();
    let available = vec![
        make_tag("tag-drill", "drill"),
        make_tag("tag-aerobic", "aerobic"),
        make_tag("tag-other", "other"),
    ];

    let mut form = PracticeLogForm::new();
    form.sync(true, Some(&record), &available);

    let menu = &form.menus()[0];
    assert_eq!(menu.id, "log-8f21c6d4");
    assert_eq!(menu.style, "Ba");
    assert_eq!(menu.swim_category, SwimCategory::Pull);
    assert_eq!(menu.distance, NumInput::Number(50));
    assert_eq!(menu.reps, NumInput::Number(8));
    assert_eq!(menu.sets, NumInput::Number(2));
    assert_eq!(menu.circle_min, NumInput::Number(1), "95 s splits as 1:35");
    assert_eq!(menu.circle_sec, NumInput::Number(35));

    // Empty record tags plus tag_ids resolve against the available list.
    let tag_names: Vec<&str> = menu.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["drill", "aerobic"]);

    // The two member groups flatten into three entries, in group order.
    assert_eq!(menu.times.len(), 3);
    assert_eq!(menu.times[0].time, 42.3);
    assert_eq!(menu.times[2].set_number, 2);
}

#[test]
fn test_close_and_reopen_discards_in_session_edits() {
    let record = load_edit_record();
    let mut form = PracticeLogForm::new();
    form.sync(true, Some(&record), &[]);

    form.update_menu("log-8f21c6d4", MenuUpdate::Distance(400.into()));
    form.update_menu("log-8f21c6d4", MenuUpdate::Note(String::new()));
    assert!(form.has_unsaved_changes());

    // Same record, closed and reopened: a fresh derivation.
    form.sync(false, Some(&record), &[]);
    form.sync(true, Some(&record), &[]);

    let menu = &form.menus()[0];
    assert_eq!(menu.distance, NumInput::Number(50));
    assert_eq!(menu.note, "catch-up drill, focus on rotation");
    assert!(!form.has_unsaved_changes());
}

#[test]
fn test_wire_updates_drive_the_session() {
    let mut form = PracticeLogForm::new();
    form.sync(true, None, &[]);

    for update in [
        json!({ "field": "distance", "value": "" }),
        json!({ "field": "swimCategory", "value": "Kick" }),
        json!({ "field": "note", "value": "pull buoy" }),
    ] {
        let update: MenuUpdate = serde_json::from_value(update).expect("wire update");
        form.update_menu("1", update);
    }

    let menu = &form.menus()[0];
    assert_eq!(menu.distance, NumInput::Raw(String::new()));
    assert_eq!(menu.swim_category, SwimCategory::Kick);
    assert_eq!(menu.note, "pull buoy");

    let payload = form.prepare_submit_data();
    assert_eq!(payload[0].distance, 100, "blank distance submits the default");
    assert_eq!(payload[0].swim_category, SwimCategory::Kick);
}

#[test]
fn test_template_row_replaces_the_list() {
    let template: PracticeLogTemplate = serde_json::from_value(json!({
        "id": "tpl-threshold",
        "user_id": "user-1",
        "name": "Threshold 200s",
        "style": "Fr",
        "swim_category": "Swim",
        "distance": 200,
        "rep_count": 6,
        "set_count": 2,
        "circle": 170,
        "note": "hold best average",
        "tag_ids": ["tag-threshold"],
        "is_favorite": true,
        "use_count": 12,
        "created_at": "2024-03-11T18:00:00Z",
        "updated_at": "2024-05-20T07:45:00Z"
    }))
    .expect("template row");

    let mut form = PracticeLogForm::new();
    form.sync(true, None, &[]);
    form.add_menu();
    form.add_menu();

    form.apply_template(&template, &[make_tag("tag-threshold", "threshold")]);
    assert_eq!(form.menus().len(), 1);

    let menu = &form.menus()[0];
    assert_eq!(menu.style, "Fr");
    assert_eq!(menu.distance, NumInput::Number(200));
    assert_eq!(menu.circle_min, NumInput::Number(2));
    assert_eq!(menu.circle_sec, NumInput::Number(50));
    assert_eq!(menu.note, "hold best average");
    assert_eq!(menu.tags[0].name, "threshold");
}

#[test]
fn test_submit_payload_wire_shape() {
    let mut form = PracticeLogForm::new();
    form.sync(true, None, &[]);

    let payload = serde_json::to_value(form.prepare_submit_data()).expect("serialize payload");
    assert_eq!(
        payload,
        json!([{
            "style": "Fr",
            "swimCategory": "Swim",
            "distance": 100,
            "reps": 4,
            "sets": 1,
            "circleTime": 90,
            "note": "",
            "tags": [],
            "times": []
        }]),
        "the default session must submit exactly this record"
    );
}
