//! Core library for SwimHub's practice log editor.
//!
//! The web client renders the form; this crate owns its state. See
//! [`practice_log`] for the session controller, the initialization
//! derivations, and the submission normalizer.

pub mod practice_log;

pub use practice_log::{
    MenuUpdate, NumInput, PracticeLogEditData, PracticeLogForm, PracticeLogSubmitData,
    PracticeLogTemplate, PracticeMenu, SwimCategory, Tag, TimeEntry,
};
