// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML page shell.
//!
//! Every page shares the same document: `lang`/`dir` on the root element, the
//! main menu and a language switcher. Menu labels come from the ambient
//! context, so callers must render inside `provide_sync`.

use std::fmt::Write;

use lingo_i18n_core::{use_i18n, LinkBuilder, Namespace};

/// Menu entries as (path, message key).
const MENU: &[(&str, &str)] = &[
	("/", "home"),
	("/dashboard", "dashboard"),
	("/wallet", "wallet"),
];

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

/// Render a full document around `body`.
///
/// `body` is inserted verbatim; escape its text before passing it in.
pub fn page(links: &LinkBuilder, current_path: &str, title: &str, body: &str) -> String {
	let ctx = use_i18n();
	let menu = ctx.namespace(Namespace::Menu);
	let common = ctx.namespace(Namespace::Common);
	let registry = links.registry();

	let mut html = String::new();
	let _ = write!(
		html,
		"<!doctype html>\n<html lang=\"{lang}\" dir=\"{dir}\">\n<head><meta charset=\"utf-8\"><title>{title} | {app}</title></head>\n<body>\n",
		lang = escape_html(ctx.locale().as_str()),
		dir = ctx.direction().as_html_dir(),
		title = escape_html(title),
		app = escape_html(&common.t("app.name")),
	);

	html.push_str("<nav>");
	for (path, key) in MENU {
		let _ = write!(
			html,
			"<a href=\"{}\">{}</a>",
			escape_html(&links.href(path)),
			escape_html(&menu.t(key))
		);
	}
	html.push_str("</nav>\n<main>\n");
	html.push_str(body);
	html.push_str("\n</main>\n<footer><span>");
	html.push_str(&escape_html(&common.t("language.label")));
	html.push_str("</span>");

	for locale in registry.locales() {
		if locale == ctx.locale() {
			continue;
		}
		let info = registry.info(locale);
		let _ = write!(
			html,
			" <a href=\"{href}\" hreflang=\"{code}\" lang=\"{code}\" dir=\"{dir}\">{name}</a>",
			href = escape_html(&links.switch_locale(current_path, locale)),
			code = escape_html(locale.as_str()),
			dir = info.direction.as_html_dir(),
			name = escape_html(&info.native_name),
		);
	}
	html.push_str("</footer>\n</body>\n</html>\n");
	html
}
