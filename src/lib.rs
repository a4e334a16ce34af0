// lib.rs
// Library modules for the lotto generator

pub mod defs;
pub mod pouch;
pub mod game;
pub mod draw;
pub mod config;
pub mod logging;
pub mod app;
