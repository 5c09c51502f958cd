//! Submission-time projection of the menu list.
//!
//! Numeric fields resolve through the same `Number(value) || default`
//! coercion the web client applies: whatever raw text a field holds, the
//! transport record carries a number, with an explicit 0 and an empty or
//! unparseable string all resolving to the field's default.

use tracing::debug;

use super::types::{PracticeLogSubmitData, PracticeMenu};

/// Projects every menu, in list order, into a transport record. Cardinality
/// always equals the menu count.
pub fn prepare_submit_data(menus: &[PracticeMenu]) -> Vec<PracticeLogSubmitData> {
    debug!("Preparing submit payload for {} menus", menus.len());
    menus.iter().map(submit_record).collect()
}

fn submit_record(menu: &PracticeMenu) -> PracticeLogSubmitData {
    let circle_time = menu
        .circle_min
        .or_default(0)
        .saturating_mul(60)
        .saturating_add(menu.circle_sec.or_default(0));

    PracticeLogSubmitData {
        style: menu.style.clone(),
        swim_category: menu.swim_category,
        distance: menu.distance.or_default(100),
        reps: menu.reps.or_default(1),
        sets: menu.sets.or_default(1),
        // "No circle" travels as null, never as 0.
        circle_time: if circle_time > 0 { Some(circle_time) } else { None },
        note: menu.note.clone(),
        tags: menu.tags.clone(),
        times: menu.times.clone(),
    }
}
