#![doc = "The `tasksense` library crate."]
#![doc = ""]
#![doc = "This crate contains the heuristic analysis routines, domain models, routing"]
#![doc = "configuration, and error handling for the TaskSense service. It is used by"]
#![doc = "the main binary (`main.rs`) to construct and run the application."]

pub mod ai;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
