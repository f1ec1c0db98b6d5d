//! Shared UI crate for Folio Pulse. The chart and gauge logic lives in
//! `core`; `components` and `views` are the Dioxus layer every platform
//! launcher mounts.

pub mod components;
pub mod core;
pub mod views;
