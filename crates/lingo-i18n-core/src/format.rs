// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message resolution: key lookup, plural selection and interpolation.
//!
//! Templates support `{name}` placeholders and at most one plural block:
//!
//! ```text
//! {count, plural, zero {No items} one {# item} other {# items}}
//! ```
//!
//! The plural block is expanded first so that placeholders inside the
//! selected form are still substituted by the interpolation pass.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::tree::MessageTree;

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// A value substituted into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
	Str(String),
	Int(i64),
	Float(f64),
}

impl ArgValue {
	/// Numeric value used for plural selection.
	///
	/// Strings are parsed after trimming; non-numeric strings have none.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			ArgValue::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
			ArgValue::Int(i) => Some(*i as f64),
			ArgValue::Float(f) => Some(*f),
		}
	}
}

impl fmt::Display for ArgValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ArgValue::Str(s) => f.write_str(s),
			ArgValue::Int(i) => write!(f, "{i}"),
			ArgValue::Float(x) => write!(f, "{x}"),
		}
	}
}

impl From<&str> for ArgValue {
	fn from(value: &str) -> Self {
		ArgValue::Str(value.to_string())
	}
}

impl From<String> for ArgValue {
	fn from(value: String) -> Self {
		ArgValue::Str(value)
	}
}

impl From<&String> for ArgValue {
	fn from(value: &String) -> Self {
		ArgValue::Str(value.clone())
	}
}

macro_rules! int_arg {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for ArgValue {
				fn from(value: $ty) -> Self {
					ArgValue::Int(i64::from(value))
				}
			}
		)*
	};
}

int_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ArgValue {
	fn from(value: u64) -> Self {
		i64::try_from(value)
			.map(ArgValue::Int)
			.unwrap_or(ArgValue::Float(value as f64))
	}
}

impl From<usize> for ArgValue {
	fn from(value: usize) -> Self {
		ArgValue::from(value as u64)
	}
}

impl From<f32> for ArgValue {
	fn from(value: f32) -> Self {
		ArgValue::Float(f64::from(value))
	}
}

impl From<f64> for ArgValue {
	fn from(value: f64) -> Self {
		ArgValue::Float(value)
	}
}

/// Named arguments for a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
	entries: Vec<(String, ArgValue)>,
}

impl Args {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an argument, replacing any previous value with the same name.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&ArgValue> {
		self
			.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Args
where
	K: Into<String>,
	V: Into<ArgValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut args = Args::new();
		for (name, value) in iter {
			args.insert(name, value);
		}
		args
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Args
where
	K: Into<String>,
	V: Into<ArgValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// Build [`Args`] from `name => value` pairs with mixed value types.
///
/// ```
/// use lingo_i18n_core::args;
///
/// let args = args!["name" => "Ada", "count" => 3];
/// assert_eq!(args.get("count").unwrap().to_string(), "3");
/// ```
#[macro_export]
macro_rules! args {
	() => {
		$crate::Args::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		$crate::Args::new()$(.with($name, $value))+
	};
}

/// Look up the raw template at a dotted key.
pub fn lookup<'a>(tree: &'a MessageTree, dotted_key: &str) -> Option<&'a str> {
	tree.get_text(dotted_key)
}

/// Resolve a dotted key against a tree and format it with `args`.
///
/// Returns the key itself when the path does not end at a template.
pub fn resolve(tree: &MessageTree, dotted_key: &str, args: &Args) -> String {
	match lookup(tree, dotted_key) {
		Some(template) => format_template(template, args),
		None => dotted_key.to_string(),
	}
}

/// Apply plural selection and placeholder interpolation to a template.
pub fn format_template(template: &str, args: &Args) -> String {
	if args.is_empty() {
		return template.to_string();
	}
	let expanded = expand_plural(template, args);
	interpolate(&expanded, args)
}

fn interpolate(template: &str, args: &Args) -> String {
	PLACEHOLDER
		.replace_all(template, |caps: &Captures<'_>| match args.get(&caps[1]) {
			Some(value) => value.to_string(),
			None => caps[0].to_string(),
		})
		.into_owned()
}

// =============================================================================
// Plural blocks
// =============================================================================

#[derive(Debug)]
struct PluralBlock<'a> {
	start: usize,
	end: usize,
	count_key: &'a str,
	forms: Vec<(&'a str, &'a str)>,
}

impl<'a> PluralBlock<'a> {
	fn form(&self, name: &str) -> Option<&'a str> {
		self
			.forms
			.iter()
			.find(|(form, _)| *form == name)
			.map(|(_, text)| *text)
	}
}

fn expand_plural(template: &str, args: &Args) -> String {
	let Some(block) = find_plural_block(template) else {
		return template.to_string();
	};
	let Some(value) = args.get(block.count_key) else {
		return template.to_string();
	};

	let exact = match value.as_number() {
		Some(n) if n == 0.0 => Some("zero"),
		Some(n) if n == 1.0 => Some("one"),
		Some(n) if n == 2.0 => Some("two"),
		_ => None,
	};
	let Some(text) = exact
		.and_then(|name| block.form(name))
		.or_else(|| block.form("other"))
	else {
		return template.to_string();
	};

	// `#` renders the parsed count; only non-numeric strings keep their text.
	let count = match value {
		ArgValue::Str(_) => value
			.as_number()
			.map_or_else(|| value.to_string(), |n| n.to_string()),
		_ => value.to_string(),
	};

	let mut out = String::with_capacity(template.len());
	out.push_str(&template[..block.start]);
	out.push_str(&text.replace('#', &count));
	out.push_str(&template[block.end..]);
	out
}

fn find_plural_block(template: &str) -> Option<PluralBlock<'_>> {
	template
		.match_indices('{')
		.find_map(|(start, _)| parse_plural_block(template, start))
}

fn is_word(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b == b'_'
}

struct Cursor<'a> {
	src: &'a str,
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn peek(&self) -> Option<u8> {
		self.src.as_bytes().get(self.pos).copied()
	}

	fn skip_ws(&mut self) {
		while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
			self.pos += 1;
		}
	}

	fn eat(&mut self, b: u8) -> bool {
		if self.peek() == Some(b) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	fn word(&mut self) -> Option<&'a str> {
		let start = self.pos;
		while self.peek().is_some_and(is_word) {
			self.pos += 1;
		}
		let src = self.src;
		(self.pos > start).then(|| &src[start..self.pos])
	}

	/// Consume a brace-delimited body, returning the text between the braces.
	fn braced(&mut self) -> Option<&'a str> {
		if !self.eat(b'{') {
			return None;
		}
		let start = self.pos;
		let mut depth = 1usize;
		while let Some(b) = self.peek() {
			self.pos += 1;
			match b {
				b'{' => depth += 1,
				b'}' => {
					depth -= 1;
					if depth == 0 {
						let src = self.src;
						return Some(&src[start..self.pos - 1]);
					}
				}
				_ => {}
			}
		}
		None
	}
}

fn parse_plural_block(template: &str, start: usize) -> Option<PluralBlock<'_>> {
	let mut cur = Cursor {
		src: template,
		pos: start,
	};
	if !cur.eat(b'{') {
		return None;
	}
	cur.skip_ws();
	let count_key = cur.word()?;
	cur.skip_ws();
	if !cur.eat(b',') {
		return None;
	}
	cur.skip_ws();
	if cur.word()? != "plural" {
		return None;
	}
	cur.skip_ws();
	if !cur.eat(b',') {
		return None;
	}

	let mut forms = Vec::new();
	loop {
		cur.skip_ws();
		if cur.eat(b'}') {
			break;
		}
		let name = cur.word()?;
		cur.skip_ws();
		let text = cur.braced()?;
		forms.push((name, text));
	}

	if forms.is_empty() {
		return None;
	}

	Some(PluralBlock {
		start,
		end: cur.pos,
		count_key,
		forms,
	})
}
