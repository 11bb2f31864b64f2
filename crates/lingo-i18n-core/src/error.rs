// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

use crate::namespace::Namespace;

/// Errors raised while reading a message document.
///
/// The catalog never propagates these to callers: an unreadable document is
/// logged and treated as empty.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("failed to read message document {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse message document {}: {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("malformed message document for {locale}/{namespace}: {reason}")]
	Malformed {
		locale: String,
		namespace: Namespace,
		reason: String,
	},
}

/// Errors surfaced by the i18n engine.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("no I18nContext is in scope; wrap the caller in lingo_i18n_core::provide")]
	MissingProvider,

	#[error(transparent)]
	Source(#[from] SourceError),
}
