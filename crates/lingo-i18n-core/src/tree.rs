// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Nested message trees.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

/// A node in a [`MessageTree`]: either a template or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
	Text(String),
	Tree(MessageTree),
}

/// A recursive mapping from keys to templates or subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageTree {
	entries: BTreeMap<String, MessageNode>,
}

impl MessageTree {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a tree from a JSON object.
	///
	/// Strings become templates and objects become subtrees. Other JSON
	/// values cannot be rendered and are skipped. Returns `None` when `value`
	/// is not an object.
	pub fn from_json(value: Value) -> Option<Self> {
		match value {
			Value::Object(map) => {
				let mut tree = MessageTree::new();
				for (key, value) in map {
					match value {
						Value::String(text) => {
							tree.entries.insert(key, MessageNode::Text(text));
						}
						Value::Object(_) => {
							if let Some(subtree) = MessageTree::from_json(value) {
								tree.entries.insert(key, MessageNode::Tree(subtree));
							}
						}
						other => {
							trace!(key = %key, value = %other, "skipping non-string message value");
						}
					}
				}
				Some(tree)
			}
			_ => None,
		}
	}

	/// Insert a template at a dotted key path, creating subtrees as needed.
	///
	/// An existing template on the path is replaced by a subtree.
	pub fn insert(&mut self, dotted_key: &str, template: impl Into<String>) {
		let mut segments: Vec<&str> = dotted_key.split('.').collect();
		let Some(last) = segments.pop() else {
			return;
		};

		let mut current = self;
		for segment in segments {
			let node = current
				.entries
				.entry(segment.to_string())
				.or_insert_with(|| MessageNode::Tree(MessageTree::new()));
			if let MessageNode::Text(_) = node {
				*node = MessageNode::Tree(MessageTree::new());
			}
			current = match node {
				MessageNode::Tree(tree) => tree,
				MessageNode::Text(_) => unreachable!("replaced with a subtree above"),
			};
		}
		current
			.entries
			.insert(last.to_string(), MessageNode::Text(template.into()));
	}

	/// Builder form of [`MessageTree::insert`].
	pub fn with(mut self, dotted_key: &str, template: impl Into<String>) -> Self {
		self.insert(dotted_key, template);
		self
	}

	/// Walk the tree along a dotted key path.
	pub fn get(&self, dotted_key: &str) -> Option<&MessageNode> {
		let mut segments = dotted_key.split('.');
		let first = segments.next()?;
		let mut node = self.entries.get(first)?;
		for segment in segments {
			node = match node {
				MessageNode::Tree(tree) => tree.entries.get(segment)?,
				MessageNode::Text(_) => return None,
			};
		}
		Some(node)
	}

	/// The template at a dotted key path, if the path ends at a string.
	pub fn get_text(&self, dotted_key: &str) -> Option<&str> {
		match self.get(dotted_key)? {
			MessageNode::Text(text) => Some(text),
			MessageNode::Tree(_) => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageNode)> {
		self.entries.iter()
	}

	/// Number of templates in the tree, counting nested subtrees.
	pub fn leaf_count(&self) -> usize {
		self
			.entries
			.values()
			.map(|node| match node {
				MessageNode::Text(_) => 1,
				MessageNode::Tree(tree) => tree.leaf_count(),
			})
			.sum()
	}

	/// Deep-merge this tree over `fallback`.
	///
	/// Every key present in `self` wins; keys only present in `fallback` are
	/// kept. Subtrees present on both sides are merged recursively.
	pub fn merged_over(&self, fallback: &MessageTree) -> MessageTree {
		let mut merged = fallback.clone();
		merged.overlay(self);
		merged
	}

	fn overlay(&mut self, other: &MessageTree) {
		for (key, node) in &other.entries {
			match (self.entries.get_mut(key), node) {
				(Some(MessageNode::Tree(base)), MessageNode::Tree(over)) => base.overlay(over),
				_ => {
					self.entries.insert(key.clone(), node.clone());
				}
			}
		}
	}
}
