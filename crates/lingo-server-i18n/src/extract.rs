// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! axum extractors for the negotiated locale and its messages.
//!
//! [`crate::LocaleLayer`] inserts a [`RequestLocale`] into every request it
//! lets through. Handlers then take either [`RequestLocale`] (locale only) or
//! [`I18n`] (locale plus the process catalog) as an argument:
//!
//! ```ignore
//! async fn dashboard(i18n: I18n) -> Html<String> {
//!     let ctx = i18n.context(&[Namespace::Dashboard]).await;
//!     let t = ctx.namespace(Namespace::Dashboard);
//!     Html(format!("<h1>{}</h1>", t.t("title")))
//! }
//! ```

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use lingo_i18n_core::{
	Direction, I18nContext, LinkBuilder, Locale, LocaleRegistry, MessageCatalog, MessageSet,
	Namespace, Translator,
};
use tracing::instrument;

use crate::error::ExtractError;

/// The locale negotiated for this request.
#[derive(Debug, Clone)]
pub struct RequestLocale {
	locale: Locale,
	registry: Arc<LocaleRegistry>,
}

impl RequestLocale {
	pub fn new(locale: Locale, registry: Arc<LocaleRegistry>) -> Self {
		Self { locale, registry }
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn registry(&self) -> &Arc<LocaleRegistry> {
		&self.registry
	}

	pub fn direction(&self) -> Direction {
		self.registry.direction(&self.locale)
	}

	/// Link builder bound to this request's locale.
	pub fn links(&self) -> LinkBuilder {
		LinkBuilder::new(Arc::clone(&self.registry), &self.locale)
	}
}

impl<S> FromRequestParts<S> for RequestLocale
where
	S: Send + Sync,
{
	type Rejection = ExtractError;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts
			.extensions
			.get::<RequestLocale>()
			.cloned()
			.ok_or(ExtractError::MissingLocaleLayer)
	}
}

/// How [`I18n::context`] picks namespaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStrategy {
	/// Registry defaults plus the route's namespaces.
	#[default]
	RouteScoped,
	/// Every namespace, for development.
	All,
}

/// The negotiated locale plus access to the message catalog.
#[derive(Clone)]
pub struct I18n {
	locale: RequestLocale,
	catalog: Arc<MessageCatalog>,
	strategy: LoadStrategy,
}

impl I18n {
	pub fn locale(&self) -> &Locale {
		self.locale.locale()
	}

	pub fn request_locale(&self) -> &RequestLocale {
		&self.locale
	}

	pub fn catalog(&self) -> &Arc<MessageCatalog> {
		&self.catalog
	}

	pub fn links(&self) -> LinkBuilder {
		self.locale.links()
	}

	/// Load the messages a route needs.
	pub async fn messages(&self, route_namespaces: &[Namespace]) -> MessageSet {
		match self.strategy {
			LoadStrategy::RouteScoped => {
				self
					.catalog
					.load_for_route(self.locale(), route_namespaces)
					.await
			}
			LoadStrategy::All => self.catalog.load_all_namespaces(self.locale()).await,
		}
	}

	/// Build the resolution context for a route.
	#[instrument(skip_all, fields(locale = %self.locale()))]
	pub async fn context(&self, route_namespaces: &[Namespace]) -> I18nContext {
		I18nContext::new(self.messages(route_namespaces).await)
	}

	/// A translator for one namespace, without building a context.
	pub async fn translations(&self, namespace: Namespace) -> Translator {
		self.catalog.translations(self.locale(), namespace).await
	}
}

impl std::fmt::Debug for I18n {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("I18n")
			.field("locale", self.locale())
			.field("strategy", &self.strategy)
			.finish_non_exhaustive()
	}
}

impl<S> FromRequestParts<S> for I18n
where
	S: Send + Sync,
{
	type Rejection = ExtractError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let locale = RequestLocale::from_request_parts(parts, state).await?;
		let catalog = parts
			.extensions
			.get::<Arc<MessageCatalog>>()
			.cloned()
			.ok_or(ExtractError::MissingCatalog)?;
		let strategy = parts
			.extensions
			.get::<LoadStrategy>()
			.copied()
			.unwrap_or_default();

		Ok(I18n {
			locale,
			catalog,
			strategy,
		})
	}
}
