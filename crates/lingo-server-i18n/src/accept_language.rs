// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `Accept-Language` parsing.

use http::header::ACCEPT_LANGUAGE;
use http::HeaderMap;
use lingo_i18n_core::{Locale, LocaleRegistry};

/// One language range from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
	/// Lowercased primary subtag (`en` for `en-US`).
	pub base: String,
	pub weight: f32,
}

/// Parse an `Accept-Language` value into ranges ordered by descending weight.
///
/// Ranges without a `q` parameter (or with an unparseable one) weigh 1.0.
/// `q=0` ranges and the `*` wildcard are dropped. Ranges of equal weight keep
/// header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
	let mut ranges: Vec<LanguageRange> = header
		.split(',')
		.filter_map(|part| {
			let mut params = part.split(';');
			let tag = params.next().unwrap_or("").trim();
			if tag.is_empty() || tag == "*" {
				return None;
			}

			let weight = params
				.find_map(|p| {
					let (name, value) = p.split_once('=')?;
					name.trim().eq_ignore_ascii_case("q").then_some(value)
				})
				.map(parse_weight)
				.unwrap_or(1.0);
			if weight <= 0.0 {
				return None;
			}

			let base = tag
				.split(['-', '_'])
				.next()
				.unwrap_or(tag)
				.to_ascii_lowercase();
			Some(LanguageRange { base, weight })
		})
		.collect();

	// `sort_by` is stable.
	ranges.sort_by(|a, b| b.weight.total_cmp(&a.weight));
	ranges
}

fn parse_weight(raw: &str) -> f32 {
	match raw.trim().parse::<f32>() {
		Ok(q) if (0.0..=1.0).contains(&q) => q,
		_ => 1.0,
	}
}

/// The first accepted language the registry supports, matched by base subtag.
pub fn negotiate_accept_language(registry: &LocaleRegistry, header: &str) -> Option<Locale> {
	parse_accept_language(header)
		.iter()
		.find_map(|range| registry.match_base_language(&range.base))
}

/// Read and negotiate the request's `Accept-Language` header.
pub fn locale_from_headers(registry: &LocaleRegistry, headers: &HeaderMap) -> Option<Locale> {
	let header = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
	negotiate_accept_language(registry, header)
}
