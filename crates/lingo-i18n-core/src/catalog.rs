// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespace loading, default-locale merging and caching.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::join_all;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use crate::context::Translator;
use crate::locale::Locale;
use crate::namespace::Namespace;
use crate::registry::LocaleRegistry;
use crate::source::MessageSource;
use crate::tree::MessageTree;

type CacheKey = (Locale, Namespace);
type CacheCell = Arc<OnceCell<Arc<MessageTree>>>;

/// Message trees for one locale, keyed by namespace.
///
/// Never mutated after it is loaded.
#[derive(Debug, Clone)]
pub struct MessageSet {
	locale: Locale,
	namespaces: BTreeMap<Namespace, Arc<MessageTree>>,
}

impl MessageSet {
	pub fn new(locale: Locale) -> Self {
		Self {
			locale,
			namespaces: BTreeMap::new(),
		}
	}

	pub fn with_namespace(mut self, namespace: Namespace, tree: Arc<MessageTree>) -> Self {
		self.namespaces.insert(namespace, tree);
		self
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn get(&self, namespace: Namespace) -> Option<&Arc<MessageTree>> {
		self.namespaces.get(&namespace)
	}

	pub fn contains(&self, namespace: Namespace) -> bool {
		self.namespaces.contains_key(&namespace)
	}

	pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
		self.namespaces.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.namespaces.len()
	}

	pub fn is_empty(&self) -> bool {
		self.namespaces.is_empty()
	}

	/// The set as a JSON object keyed by namespace identifier, for handing
	/// messages to client-rendered code.
	pub fn to_json(&self) -> serde_json::Value {
		let map = self
			.namespaces
			.iter()
			.map(|(ns, tree)| {
				let value = serde_json::to_value(tree.as_ref()).unwrap_or_default();
				(ns.as_str().to_string(), value)
			})
			.collect::<serde_json::Map<_, _>>();
		serde_json::Value::Object(map)
	}
}

/// Loads namespaces through a [`MessageSource`] and caches the merged trees.
///
/// Each `(locale, namespace)` pair is fetched at most once: concurrent loads
/// for the same pair wait on the first one and receive the same `Arc`.
/// Trees for non-default locales are deep-merged over the default locale's
/// tree so missing keys fall back to the default translation.
pub struct MessageCatalog {
	registry: Arc<LocaleRegistry>,
	source: Arc<dyn MessageSource>,
	cache: Mutex<HashMap<CacheKey, CacheCell>>,
}

impl std::fmt::Debug for MessageCatalog {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MessageCatalog")
			.field("registry", &self.registry)
			.field("cached_entries", &self.cached_entries())
			.finish_non_exhaustive()
	}
}

impl MessageCatalog {
	pub fn new(registry: Arc<LocaleRegistry>, source: Arc<dyn MessageSource>) -> Self {
		Self {
			registry,
			source,
			cache: Mutex::new(HashMap::new()),
		}
	}

	pub fn registry(&self) -> &Arc<LocaleRegistry> {
		&self.registry
	}

	/// Number of `(locale, namespace)` entries that are cached or loading.
	pub fn cached_entries(&self) -> usize {
		self
			.cache
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	fn cell(&self, locale: &Locale, namespace: Namespace) -> CacheCell {
		let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
		cache
			.entry((locale.clone(), namespace))
			.or_default()
			.clone()
	}

	/// Load one namespace for a locale.
	///
	/// Unsupported locales load the default locale's messages.
	#[instrument(skip_all, fields(locale = %locale, namespace = %namespace))]
	pub async fn load_namespace(&self, locale: &Locale, namespace: Namespace) -> Arc<MessageTree> {
		let locale = self.registry.resolve(locale.as_str());
		if &locale == self.registry.default_locale() {
			return self.load_default(namespace).await;
		}

		let cell = self.cell(&locale, namespace);
		cell
			.get_or_init(|| async {
				let own = self.fetch_or_empty(&locale, namespace).await;
				let fallback = self.load_default(namespace).await;
				let merged = own.merged_over(&fallback);
				debug!(
					own = own.leaf_count(),
					merged = merged.leaf_count(),
					"merged namespace over default locale"
				);
				Arc::new(merged)
			})
			.await
			.clone()
	}

	async fn load_default(&self, namespace: Namespace) -> Arc<MessageTree> {
		let locale = self.registry.default_locale().clone();
		let cell = self.cell(&locale, namespace);
		cell
			.get_or_init(|| async { Arc::new(self.fetch_or_empty(&locale, namespace).await) })
			.await
			.clone()
	}

	async fn fetch_or_empty(&self, locale: &Locale, namespace: Namespace) -> MessageTree {
		match self.source.fetch(locale, namespace).await {
			Ok(Some(tree)) => {
				debug!(
					locale = %locale,
					namespace = %namespace,
					messages = tree.leaf_count(),
					"fetched message document"
				);
				tree
			}
			Ok(None) => {
				debug!(
					locale = %locale,
					namespace = %namespace,
					"no message document, using empty tree"
				);
				MessageTree::new()
			}
			Err(e) => {
				warn!(
					locale = %locale,
					namespace = %namespace,
					error = %e,
					"failed to load message document, using empty tree"
				);
				MessageTree::new()
			}
		}
	}

	/// Load several namespaces concurrently.
	///
	/// The result contains exactly the requested namespaces.
	pub async fn load_namespaces(&self, locale: &Locale, namespaces: &[Namespace]) -> MessageSet {
		let locale = self.registry.resolve(locale.as_str());

		let mut unique: Vec<Namespace> = Vec::with_capacity(namespaces.len());
		for ns in namespaces {
			if !unique.contains(ns) {
				unique.push(*ns);
			}
		}

		let trees = join_all(unique.iter().map(|ns| self.load_namespace(&locale, *ns))).await;

		unique
			.into_iter()
			.zip(trees)
			.fold(MessageSet::new(locale.clone()), |set, (ns, tree)| {
				set.with_namespace(ns, tree)
			})
	}

	/// Load every namespace, for development builds that want the full
	/// catalog.
	pub async fn load_all_namespaces(&self, locale: &Locale) -> MessageSet {
		self.load_namespaces(locale, Namespace::ALL).await
	}

	/// Load the registry's default namespaces plus those a route declares.
	pub async fn load_for_route(&self, locale: &Locale, route_namespaces: &[Namespace]) -> MessageSet {
		let namespaces: Vec<Namespace> = self
			.registry
			.default_namespaces()
			.iter()
			.chain(route_namespaces)
			.copied()
			.collect();
		self.load_namespaces(locale, &namespaces).await
	}

	/// Load a namespace and bind a [`Translator`] to it.
	pub async fn translations(&self, locale: &Locale, namespace: Namespace) -> Translator {
		let locale = self.registry.resolve(locale.as_str());
		let tree = self.load_namespace(&locale, namespace).await;
		Translator::new(locale, namespace, tree)
	}
}

/// Direct accessor for code that runs once per request without a scoped
/// [`crate::I18nContext`].
pub async fn get_translations(
	catalog: &MessageCatalog,
	locale: &Locale,
	namespace: Namespace,
) -> Translator {
	catalog.translations(locale, namespace).await
}
