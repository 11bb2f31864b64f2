// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized HTML pages.

use axum::{
	extract::Query,
	http::{StatusCode, Uri},
	response::{Html, IntoResponse, Redirect, Response},
};
use lingo_i18n_core::{args, get_translations, provide_sync, use_translations, Namespace};
use lingo_server_i18n::{ExtractError, I18n, RequestLocale};
use serde::Deserialize;

use crate::render::{escape_html, page};

fn current_path(uri: &Uri) -> &str {
	uri.path_and_query().map_or(uri.path(), |pq| pq.as_str())
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
	pub name: Option<String>,
}

/// GET /{locale}
pub async fn home(i18n: I18n, uri: Uri, Query(query): Query<HomeQuery>) -> Html<String> {
	let ctx = i18n.context(&[]).await;
	let links = i18n.links();

	let html = provide_sync(ctx, || {
		let common = use_translations(Namespace::Common);
		let greeting = match query.name.as_deref().map(str::trim) {
			Some(name) if !name.is_empty() => common.t_fmt("greeting.hello", &args!("name" => name)),
			_ => common.t("greeting.guest"),
		};
		let body = format!(
			"<h1>{}</h1>\n<p>{}</p>",
			escape_html(&greeting),
			escape_html(&common.t("home.intro"))
		);
		page(&links, current_path(&uri), &common.t("home.title"), &body)
	});

	Html(html)
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
	pub orders: Option<u32>,
}

/// GET /{locale}/dashboard
pub async fn dashboard(
	i18n: I18n,
	uri: Uri,
	Query(query): Query<DashboardQuery>,
) -> Html<String> {
	let ctx = i18n.context(&[Namespace::Dashboard]).await;
	let links = i18n.links();
	let orders = query.orders.unwrap_or(0);

	let html = provide_sync(ctx, || {
		let t = use_translations(Namespace::Dashboard);
		let body = format!(
			"<h1>{}</h1>\n<p>{}</p>\n<p>{}</p>",
			escape_html(&t.t("title")),
			escape_html(&t.t_fmt("balance", &args!("amount" => "0.00"))),
			escape_html(&t.t_fmt("orders.open", &args!("count" => orders))),
		);
		page(&links, current_path(&uri), &t.t("title"), &body)
	});

	Html(html)
}

/// GET /{locale}/wallet
pub async fn wallet(i18n: I18n, uri: Uri) -> Html<String> {
	let wallet = get_translations(i18n.catalog(), i18n.locale(), Namespace::Wallet).await;
	let ctx = i18n.context(&[]).await;
	let links = i18n.links();

	let body = format!(
		"<h1>{}</h1>\n<p>{}</p>\n<a href=\"{}\">{}</a>",
		escape_html(&wallet.t("title")),
		escape_html(&wallet.t("empty")),
		escape_html(&links.href("/account")),
		escape_html(&wallet.t("account_link")),
	);
	let html = provide_sync(ctx, || {
		page(&links, current_path(&uri), &wallet.t("title"), &body)
	});

	Html(html)
}

/// GET /{locale}/account
///
/// Account settings live on the dashboard.
pub async fn account(locale: RequestLocale) -> Redirect {
	locale.redirect("/dashboard")
}

/// Router fallback.
///
/// Inside the locale layer the 404 page is localized. Paths that skipped
/// negotiation get a bare 404.
pub async fn not_found(i18n: Result<I18n, ExtractError>, uri: Uri) -> Response {
	let Ok(i18n) = i18n else {
		return StatusCode::NOT_FOUND.into_response();
	};

	let ctx = i18n.context(&[Namespace::Errors]).await;
	let links = i18n.links();
	let html = provide_sync(ctx, || {
		let errors = use_translations(Namespace::Errors);
		let body = format!(
			"<h1>{}</h1>\n<p><a href=\"{}\">{}</a></p>",
			escape_html(&errors.t("not_found.title")),
			escape_html(&links.href("/")),
			escape_html(&errors.t("not_found.back")),
		);
		page(&links, current_path(&uri), &errors.t("not_found.title"), &body)
	});

	(StatusCode::NOT_FOUND, Html(html)).into_response()
}
