// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message namespaces.
//!
//! Every message document belongs to exactly one namespace. Pages declare the
//! namespaces they render so only those documents are loaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A partition of the message space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
	Common,
	Menu,
	Auth,
	Dashboard,
	Wallet,
	Support,
	Errors,
	#[serde(rename = "ext_p2p")]
	ExtP2p,
}

impl Namespace {
	/// Every namespace, in declaration order.
	pub const ALL: &'static [Namespace] = &[
		Namespace::Common,
		Namespace::Menu,
		Namespace::Auth,
		Namespace::Dashboard,
		Namespace::Wallet,
		Namespace::Support,
		Namespace::Errors,
		Namespace::ExtP2p,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Common => "common",
			Self::Menu => "menu",
			Self::Auth => "auth",
			Self::Dashboard => "dashboard",
			Self::Wallet => "wallet",
			Self::Support => "support",
			Self::Errors => "errors",
			Self::ExtP2p => "ext_p2p",
		}
	}
}

impl fmt::Display for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown namespace identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown namespace: {0}")]
pub struct UnknownNamespace(pub String);

impl FromStr for Namespace {
	type Err = UnknownNamespace;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Namespace::ALL
			.iter()
			.copied()
			.find(|ns| ns.as_str() == s)
			.ok_or_else(|| UnknownNamespace(s.to_string()))
	}
}
