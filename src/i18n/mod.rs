// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Message catalogs are embedded `.ftl` files under `assets/i18n/`; locale
//! resolution prefers the CLI override, then the persisted config, then the
//! OS locale, and falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
