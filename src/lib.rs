// SPDX-License-Identifier: MPL-2.0
//! `archivio` is a retro-themed desktop demo — a "museum of lost websites" —
//! built with the Iced GUI framework.
//!
//! Seven screens browse a hard-coded mock catalog inside switchable CRT
//! monitor skins. It demonstrates user preference management, localization
//! with Fluent, and modular UI design; no real backend exists anywhere.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod launcher;
pub mod ui;
