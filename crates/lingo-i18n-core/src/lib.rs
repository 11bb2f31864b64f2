// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespaced message catalogs for Lingo.
//!
//! Messages live in one JSON document per locale and namespace
//! (`<root>/<locale>/<namespace>.json`). Documents for a non-default locale are
//! deep-merged over the default locale's document, so any key missing from a
//! translation falls back to the default text. Both left-to-right (LTR) and
//! right-to-left (RTL) locales are supported.
//!
//! # Message Format
//!
//! Keys use dot notation (`dashboard.balance.title`). Templates may contain
//! `{name}` placeholders and at most one ICU-style plural block:
//!
//! ```text
//! {count, plural, zero {No orders} one {# order} other {# orders}}
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lingo_i18n_core::{
//!     args, provide_sync, use_translations, I18nContext, Locale, LocaleRegistry,
//!     MemoryMessageSource, MessageCatalog, Namespace,
//! };
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let registry = Arc::new(LocaleRegistry::from_parts(Some("en"), Some("en,ar")));
//! let source = MemoryMessageSource::new().with_document(
//!     "en",
//!     Namespace::Common,
//!     json!({ "cart": "{n, plural, one {# item} other {# items}}" }),
//! );
//! let catalog = MessageCatalog::new(registry, Arc::new(source));
//!
//! let set = catalog.load_for_route(&Locale::new("ar"), &[]).await;
//! let ctx = I18nContext::new(set);
//!
//! let text = provide_sync(ctx, || {
//!     use_translations(Namespace::Common).t_fmt("cart", &args!["n" => 3])
//! });
//! assert_eq!(text, "3 items");
//! # });
//! ```

mod catalog;
pub mod compat;
mod context;
mod error;
mod format;
mod locale;
mod namespace;
mod navigation;
mod registry;
mod source;
mod tree;

pub use catalog::{get_translations, MessageCatalog, MessageSet};
pub use context::{
	provide, provide_sync, try_use_i18n, use_i18n, use_locale, use_translations, I18nContext,
	Translator,
};
pub use error::{I18nError, SourceError};
pub use format::{format_template, lookup, resolve, ArgValue, Args};
pub use locale::{is_rtl, locale_info, Direction, Locale, LocaleInfo};
pub use namespace::{Namespace, UnknownNamespace};
pub use navigation::{
	add_locale_prefix, is_external_href, locale_from_path, remove_locale_prefix, LinkBuilder,
};
pub use registry::{
	parse_locale_list, LocaleRegistry, DEFAULT_LOCALE, DEFAULT_LOCALE_ENV, DEFAULT_NAMESPACES,
	FALLBACK_LOCALES, LOCALES_ENV,
};
pub use source::{FsMessageSource, MemoryMessageSource, MessageSource};
pub use tree::{MessageNode, MessageTree};
