// SPDX-License-Identifier: MPL-2.0
//! The seven screens of the museum.
//!
//! Every page follows the same shape: a `State` owning the page's transient
//! selection, a `Message` enum for its interactions, an `Event` enum for
//! what the application must act on, and `update`/`view` functions. Pages
//! never perform side effects themselves — launching URLs, persisting
//! preferences and showing toasts are all application-level reactions to
//! page events.

pub mod about;
pub mod explore;
pub mod home;
pub mod search;
pub mod settings;
pub mod submit;
pub mod timeline;
