//! Type definitions for the practice log form engine.
//!
//! Wire casing follows the SwimHub web client: menu and submit records are
//! camelCase, while edit and template records keep the snake_case row shape
//! of the remote store (with the one historical exception of `memberId`,
//! which was assembled client-side and is camelCase inside an otherwise
//! snake_case record).

use serde::{Deserialize, Serialize};

// =============================================================================
// EXTERNALLY OWNED VALUES
// =============================================================================

/// A label owned by the tag subsystem. The engine attaches and detaches
/// whole tags but never edits their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    pub user_id: String,
    /// Store timestamps, kept verbatim; the engine never interprets them.
    pub created_at: String,
    pub updated_at: String,
}

/// One recorded split inside a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// 1-based set index.
    pub set_number: u32,
    /// 1-based repetition index within the set.
    pub rep_number: u32,
    /// Seconds.
    pub time: f64,
}

/// Per-member time group as stored on a historical entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTimes {
    pub member_id: String,
    #[serde(default)]
    pub times: Vec<TimeEntry>,
}

// =============================================================================
// FORM FIELD VALUES
// =============================================================================

/// Secondary stroke classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwimCategory {
    Swim,
    Pull,
    Kick,
}

impl Default for SwimCategory {
    fn default() -> Self {
        SwimCategory::Swim
    }
}

/// A numeric form field as the editor actually holds it.
///
/// Keystrokes arrive from the UI as raw text and are stored verbatim,
/// including the empty string for "not yet typed"; initial and derived
/// values are numbers. Nothing is coerced until submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumInput {
    Number(u32),
    Raw(String),
}

impl NumInput {
    /// Resolves the field to a number, falling back to `default` exactly the
    /// way the web client's `Number(value) || default` does: an explicit 0,
    /// an empty string, and unparseable text are all indistinguishable from
    /// "unset" and resolve to the default. Documented behavior, not a bug.
    pub fn or_default(&self, default: u32) -> u32 {
        match self {
            NumInput::Number(0) => default,
            NumInput::Number(n) => *n,
            NumInput::Raw(text) => match text.trim().parse::<u32>() {
                Ok(0) | Err(_) => default,
                Ok(n) => n,
            },
        }
    }
}

impl From<u32> for NumInput {
    fn from(n: u32) -> Self {
        NumInput::Number(n)
    }
}

impl From<&str> for NumInput {
    fn from(text: &str) -> Self {
        NumInput::Raw(text.to_string())
    }
}

impl From<String> for NumInput {
    fn from(text: String) -> Self {
        NumInput::Raw(text)
    }
}

// =============================================================================
// THE EDITING UNIT
// =============================================================================

/// One practice set as edited in the form.
///
/// `circle_min` and `circle_sec` always stay split the way the two input
/// fields present them; the engine never folds seconds >= 60 into minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeMenu {
    /// Unique within the live menu list.
    pub id: String,
    pub style: String,
    pub swim_category: SwimCategory,
    pub distance: NumInput,
    pub reps: NumInput,
    pub sets: NumInput,
    pub circle_min: NumInput,
    pub circle_sec: NumInput,
    pub note: String,
    pub tags: Vec<Tag>,
    pub times: Vec<TimeEntry>,
}

// =============================================================================
// EXTERNAL RECORDS (read-only inputs)
// =============================================================================

/// Historical entry supplied when the form opens in edit mode. Every field
/// is optional; missing ones fall back per-field during initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeLogEditData {
    pub id: Option<String>,
    pub style: Option<String>,
    pub swim_category: Option<SwimCategory>,
    pub distance: Option<u32>,
    pub rep_count: Option<u32>,
    pub set_count: Option<u32>,
    /// Interval time in total seconds; null means "no circle".
    pub circle: Option<u32>,
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    /// Fallback when the record carries tag ids but no resolved tags.
    #[serde(default)]
    pub tag_ids: Option<Vec<String>>,
    /// Times grouped per member; the editor flattens these.
    #[serde(default)]
    pub times: Option<Vec<MemberTimes>>,
}

/// Catalog row from the template subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeLogTemplate {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub style: String,
    pub swim_category: SwimCategory,
    pub distance: u32,
    pub rep_count: u32,
    pub set_count: u32,
    pub circle: Option<u32>,
    pub note: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub use_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// OUTBOUND RECORDS
// =============================================================================

/// Transport-ready projection of one menu, produced at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeLogSubmitData {
    pub style: String,
    pub swim_category: SwimCategory,
    pub distance: u32,
    pub reps: u32,
    pub sets: u32,
    /// Total seconds; `None` when the circle resolves to zero ("no circle"
    /// is null on the wire, never 0).
    pub circle_time: Option<u32>,
    pub note: String,
    pub tags: Vec<Tag>,
    pub times: Vec<TimeEntry>,
}

/// What the time sub-editor needs to open for one menu: the grid dimensions
/// (coerced the same way submission coerces them), the times already on the
/// menu, and the menu's 1-based position for the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEditorRequest {
    pub set_count: u32,
    pub rep_count: u32,
    pub initial_times: Vec<TimeEntry>,
    pub menu_number: usize,
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// A single-field replacement on one menu, as sent by the form UI.
///
/// `times` is deliberately absent: after initialization, times change only
/// through the time sub-editor's save path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum MenuUpdate {
    Style(String),
    SwimCategory(SwimCategory),
    Distance(NumInput),
    Reps(NumInput),
    Sets(NumInput),
    CircleMin(NumInput),
    CircleSec(NumInput),
    Note(String),
    Tags(Vec<Tag>),
}

impl MenuUpdate {
    /// Field name as the UI spells it, for logging.
    pub fn field(&self) -> &'static str {
        match self {
            MenuUpdate::Style(_) => "style",
            MenuUpdate::SwimCategory(_) => "swimCategory",
            MenuUpdate::Distance(_) => "distance",
            MenuUpdate::Reps(_) => "reps",
            MenuUpdate::Sets(_) => "sets",
            MenuUpdate::CircleMin(_) => "circleMin",
            MenuUpdate::CircleSec(_) => "circleSec",
            MenuUpdate::Note(_) => "note",
            MenuUpdate::Tags(_) => "tags",
        }
    }
}
