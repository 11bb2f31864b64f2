// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution contexts and scoped distribution.
//!
//! An [`I18nContext`] is built once per locale and loaded [`MessageSet`] and
//! handed to rendering code in one of two ways:
//!
//! - explicitly, by calling [`I18nContext::namespace`] on a context that was
//!   passed down, or
//! - ambiently, by running the render inside [`provide`] (or
//!   [`provide_sync`]) and calling [`use_translations`] / [`use_locale`]
//!   anywhere below it.
//!
//! The ambient accessors panic when no context is in scope. A missing
//! provider is a wiring defect, so it fails at the call site rather than
//! rendering placeholder text.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::catalog::MessageSet;
use crate::error::I18nError;
use crate::format::{format_template, lookup, Args};
use crate::locale::{locale_info, Direction, Locale};
use crate::namespace::Namespace;
use crate::tree::MessageTree;

static EMPTY_TREE: Lazy<Arc<MessageTree>> = Lazy::new(|| Arc::new(MessageTree::new()));

/// A lookup function bound to one locale and namespace.
#[derive(Debug, Clone)]
pub struct Translator {
	locale: Locale,
	namespace: Namespace,
	tree: Arc<MessageTree>,
}

impl Translator {
	pub fn new(locale: Locale, namespace: Namespace, tree: Arc<MessageTree>) -> Self {
		Self {
			locale,
			namespace,
			tree,
		}
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn namespace(&self) -> Namespace {
		self.namespace
	}

	/// Translate a key.
	///
	/// Returns the key itself when no template exists for it.
	pub fn t(&self, key: &str) -> String {
		self.t_fmt(key, &Args::new())
	}

	/// Translate a key with arguments for plural selection and placeholders.
	pub fn t_fmt(&self, key: &str, args: &Args) -> String {
		match lookup(&self.tree, key) {
			Some(template) => format_template(template, args),
			None => {
				self.report_missing(key);
				key.to_string()
			}
		}
	}

	/// Check whether a template exists for a key.
	pub fn has(&self, key: &str) -> bool {
		lookup(&self.tree, key).is_some()
	}

	/// The unformatted template for a key.
	pub fn raw(&self, key: &str) -> Option<&str> {
		lookup(&self.tree, key)
	}

	/// Whether both translators read from the same loaded tree.
	pub fn same_source(&self, other: &Translator) -> bool {
		self.namespace == other.namespace
			&& self.locale == other.locale
			&& Arc::ptr_eq(&self.tree, &other.tree)
	}

	fn report_missing(&self, key: &str) {
		if cfg!(debug_assertions) {
			warn!(
				locale = %self.locale,
				namespace = %self.namespace,
				key,
				"missing translation"
			);
		}
	}
}

#[derive(Debug)]
struct ContextInner {
	messages: MessageSet,
	direction: Direction,
	translators: HashMap<Namespace, Translator>,
}

/// A loaded message set paired with its locale.
///
/// Cloning is cheap and clones share the same translators.
#[derive(Debug, Clone)]
pub struct I18nContext {
	inner: Arc<ContextInner>,
}

impl I18nContext {
	pub fn new(messages: MessageSet) -> Self {
		let locale = messages.locale().clone();
		let translators = Namespace::ALL
			.iter()
			.map(|ns| {
				let tree = messages
					.get(*ns)
					.cloned()
					.unwrap_or_else(|| Arc::clone(&EMPTY_TREE));
				(*ns, Translator::new(locale.clone(), *ns, tree))
			})
			.collect();

		Self {
			inner: Arc::new(ContextInner {
				direction: locale_info(locale.as_str()).direction,
				messages,
				translators,
			}),
		}
	}

	pub fn locale(&self) -> &Locale {
		self.inner.messages.locale()
	}

	/// Text direction of the locale. Reported only; layout is up to the caller.
	pub fn direction(&self) -> Direction {
		self.inner.direction
	}

	pub fn messages(&self) -> &MessageSet {
		&self.inner.messages
	}

	/// The translator for a namespace.
	///
	/// Repeated calls on the same context return translators over the same
	/// tree. Namespaces that were not loaded resolve every key to itself.
	pub fn namespace(&self, namespace: Namespace) -> Translator {
		match self.inner.translators.get(&namespace) {
			Some(translator) => translator.clone(),
			None => Translator::new(self.locale().clone(), namespace, Arc::clone(&EMPTY_TREE)),
		}
	}

	pub fn ptr_eq(&self, other: &I18nContext) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

// =============================================================================
// Scoped distribution
// =============================================================================

tokio::task_local! {
	static CURRENT: I18nContext;
}

/// Run `future` with `ctx` as the ambient context.
pub async fn provide<F>(ctx: I18nContext, future: F) -> F::Output
where
	F: Future,
{
	CURRENT.scope(ctx, future).await
}

/// Run `f` with `ctx` as the ambient context.
pub fn provide_sync<R>(ctx: I18nContext, f: impl FnOnce() -> R) -> R {
	CURRENT.sync_scope(ctx, f)
}

/// The ambient context, or [`I18nError::MissingProvider`].
pub fn try_use_i18n() -> Result<I18nContext, I18nError> {
	CURRENT
		.try_with(|ctx| ctx.clone())
		.map_err(|_| I18nError::MissingProvider)
}

/// The ambient context.
///
/// # Panics
///
/// Panics when called outside [`provide`] or [`provide_sync`].
pub fn use_i18n() -> I18nContext {
	match try_use_i18n() {
		Ok(ctx) => ctx,
		Err(e) => panic!("use_i18n called outside of a provider scope: {e}"),
	}
}

/// The ambient translator for a namespace.
///
/// # Panics
///
/// Panics when called outside [`provide`] or [`provide_sync`].
pub fn use_translations(namespace: Namespace) -> Translator {
	use_i18n().namespace(namespace)
}

/// The ambient locale.
///
/// # Panics
///
/// Panics when called outside [`provide`] or [`provide_sync`].
pub fn use_locale() -> Locale {
	use_i18n().locale().clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{get_translations, MessageCatalog};
	use crate::registry::LocaleRegistry;
	use crate::source::MemoryMessageSource;
	use crate::args;
	use serde_json::json;

	fn message_set() -> MessageSet {
		MessageSet::new(Locale::new("ar")).with_namespace(
			Namespace::Common,
			Arc::new(
				MessageTree::new()
					.with("greeting.hello", "مرحبا {name}")
					.with("cart", "{n, plural, one {# عنصر} other {# عناصر}}"),
			),
		)
	}

	#[test]
	fn test_context_translates() {
		let ctx = I18nContext::new(message_set());
		let t = ctx.namespace(Namespace::Common);
		assert_eq!(t.t_fmt("greeting.hello", &args!["name" => "Ada"]), "مرحبا Ada");
		assert_eq!(t.t_fmt("cart", &args!["n" => 1]), "1 عنصر");
	}

	#[test]
	fn test_context_reports_direction() {
		let ctx = I18nContext::new(message_set());
		assert_eq!(ctx.direction(), Direction::Rtl);
		assert_eq!(ctx.locale(), &Locale::new("ar"));
	}

	#[test]
	fn test_namespace_lookup_is_stable() {
		let ctx = I18nContext::new(message_set());
		let first = ctx.namespace(Namespace::Common);
		let second = ctx.clone().namespace(Namespace::Common);
		assert!(first.same_source(&second));
	}

	#[test]
	fn test_unloaded_namespace_returns_keys() {
		let ctx = I18nContext::new(message_set());
		let t = ctx.namespace(Namespace::Wallet);
		assert_eq!(t.t("balance.title"), "balance.title");
		assert!(!t.has("balance.title"));
		assert!(t.same_source(&ctx.namespace(Namespace::Wallet)));
	}

	#[test]
	fn test_missing_key_returns_key() {
		let ctx = I18nContext::new(message_set());
		let t = ctx.namespace(Namespace::Common);
		assert_eq!(t.t("greeting.goodbye"), "greeting.goodbye");
		assert_eq!(t.raw("greeting.hello"), Some("مرحبا {name}"));
	}

	#[test]
	fn test_provide_sync_exposes_context() {
		let ctx = I18nContext::new(message_set());
		let result = provide_sync(ctx.clone(), || {
			assert!(use_i18n().ptr_eq(&ctx));
			assert_eq!(use_locale(), Locale::new("ar"));
			use_translations(Namespace::Common).t_fmt("greeting.hello", &args!["name" => "Bo"])
		});
		assert_eq!(result, "مرحبا Bo");
	}

	#[tokio::test]
	async fn test_provide_async_scope() {
		let ctx = I18nContext::new(message_set());
		let rendered = provide(ctx, async {
			tokio::task::yield_now().await;
			let first = use_translations(Namespace::Common);
			let second = use_translations(Namespace::Common);
			assert!(first.same_source(&second));
			first.t_fmt("cart", &args!["n" => 4])
		})
		.await;
		assert_eq!(rendered, "4 عناصر");
	}

	#[test]
	fn test_try_use_outside_scope_errors() {
		let err = try_use_i18n().unwrap_err();
		assert!(matches!(err, I18nError::MissingProvider));
	}

	#[test]
	#[should_panic(expected = "outside of a provider scope")]
	fn test_use_translations_outside_scope_panics() {
		let _ = use_translations(Namespace::Common);
	}

	#[tokio::test]
	async fn test_scoped_and_direct_paths_agree() {
		let registry = Arc::new(LocaleRegistry::from_parts(Some("en"), Some("en,ar")));
		let source = MemoryMessageSource::new()
			.with_document(
				"en",
				Namespace::Common,
				json!({ "inbox": "{n, plural, one {# message} other {# messages}} for {name}" }),
			)
			.with_document("ar", Namespace::Common, json!({ "title": "الرئيسية" }));
		let catalog = MessageCatalog::new(registry, Arc::new(source));
		let locale = Locale::new("ar");

		let set = catalog.load_for_route(&locale, &[]).await;
		let ctx = I18nContext::new(set);
		let direct = get_translations(&catalog, &locale, Namespace::Common).await;

		let cases = [
			("inbox", args!["n" => 1, "name" => "Ada"]),
			("inbox", args!["n" => 9, "name" => "Ada"]),
			("title", Args::new()),
			("missing.key", Args::new()),
		];

		let scoped = provide_sync(ctx, || {
			cases
				.iter()
				.map(|(key, args)| use_translations(Namespace::Common).t_fmt(key, args))
				.collect::<Vec<_>>()
		});
		let direct: Vec<String> = cases
			.iter()
			.map(|(key, args)| direct.t_fmt(key, args))
			.collect();

		assert_eq!(scoped, direct);
		assert_eq!(direct[0], "1 message for Ada");
		assert_eq!(direct[2], "الرئيسية");
	}
}
