//! Practice log form state engine.
//!
//! Manages one editing session of the practice log modal: a variable-length
//! list of practice menus, the time sub-editor's target binding, and the
//! projection of the edited state into transport records.
//!
//! # Architecture
//!
//! - **Initialization** (`init`): pure derivations. Blank defaults, circle
//!   decomposition, per-member time flattening, and projections of historical
//!   entries and catalog templates into editable menus
//! - **Session control** (`session`): `PracticeLogForm`, an explicit
//!   closed/ready lifecycle keyed by edit target, with total operations that
//!   degrade to no-ops on unknown ids
//! - **Submission** (`submit`): menu list in, transport records out, with the
//!   `Number(value) || default` coercions the web client has always applied
//!
//! # Example
//!
//! ```ignore
//! use swimhub::practice_log::{MenuUpdate, PracticeLogForm};
//!
//! let mut form = PracticeLogForm::new();
//! form.sync(true, None, &[]);
//!
//! let second = form.add_menu();
//! form.update_menu(&second, MenuUpdate::Distance(200.into()));
//!
//! form.open_time_editor(&second);
//! form.save_times(vec![]);
//!
//! let payload = form.prepare_submit_data();
//! assert_eq!(payload.len(), 2);
//! ```

pub mod init;
pub mod session;
pub mod submit;
pub mod types;

pub use init::{
    default_menu, flatten_member_times, menu_from_edit_data, menu_from_template, split_circle,
};
pub use session::{FormLifecycle, PracticeLogForm, SessionKey, TimeEditor};
pub use submit::prepare_submit_data;
pub use types::{
    MemberTimes, MenuUpdate, NumInput, PracticeLogEditData, PracticeLogSubmitData,
    PracticeLogTemplate, PracticeMenu, SwimCategory, Tag, TimeEditorRequest, TimeEntry,
};
