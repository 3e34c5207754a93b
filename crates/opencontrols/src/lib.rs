//! OpenControl workspace data
//!
//! Loads the components of an OpenControl workspace and answers the
//! per-control questions the SSP templater asks: who is responsible, which
//! origins and implementation statuses apply, and what the parameter and
//! narrative texts are.

pub mod component;
pub mod data;
pub mod error;

pub use component::{Component, Satisfies, Section};
pub use data::{
    ControlOrigins, ImplementationStatuses, LoadOptions, OpenControlData, StatusSelection,
};
pub use error::OpenControlError;
