//! Business logic layer.
//!
//! Services orchestrate repositories and external collaborators. They decide how
//! far an operation proceeds after a failure and classify results into outcomes;
//! user-facing reporting stays in the command layer.

pub mod teardown;
