//! Student roster viewer (rollcall)
//!
//! Loads a JSON array of student records once, then searches, sorts and
//! filters it in memory and shows the result in a terminal table.
//!
//! The core is pure: [`store::Store`] holds the master roster, [`query`]
//! derives views from it, [`render`] writes a view into a
//! [`render::TableBody`] and [`controller::Controller`] binds each control
//! to an operation and a render mode. [`view`] is the terminal shell.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod parser;
pub mod query;
pub mod render;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_support;
