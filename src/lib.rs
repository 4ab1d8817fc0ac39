//! Workflow driven booking notifications: trigger selection, reminder
//! timing, template rendering and email/SMS dispatch through an external
//! delivery task runner. Consumed as a library by the booking lifecycle
//! handlers.

pub mod telemetry;

pub use bookwell_workflows_api as api;
pub use bookwell_workflows_domain as domain;
pub use bookwell_workflows_infra as infra;
