// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Version reporting for the `version` subcommand.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"lingo-server version: {}\n\
		 Default locales:      {}",
		env!("CARGO_PKG_VERSION"),
		lingo_i18n_core::FALLBACK_LOCALES.join(", ")
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_version_info_mentions_package_version() {
		let info = format_version_info();
		assert!(info.contains(env!("CARGO_PKG_VERSION")));
		assert!(info.contains("en, ar"));
	}
}
