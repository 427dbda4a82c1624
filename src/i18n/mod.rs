// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale comes from the CLI, then the config file, then the system, and the
//! header toggle switches between the two shipped locales at runtime.

pub mod fluent;

pub use fluent::I18n;
