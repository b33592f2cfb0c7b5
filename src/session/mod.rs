//! Session state machine: screens, data groups, and the controller.

pub mod controller;
pub mod data;
pub mod screen;

pub use controller::{GENERIC_ERROR, INTEREST_REQUIRED, NO_SUGGESTED_STREAM, SessionController};
pub use data::{AssessmentData, AssessmentKind, ExpertContactData, JobMarketData, SelectionData};
pub use screen::{AssessmentScreen, ExpertScreen, Screen, TenthScreen, TwelfthScreen};
