// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! First-segment heuristics for vulnerability scanner traffic.
//!
//! Scanners hit `/wp-login.php`, `/.env`, `/phpmyadmin` and friends on every
//! host they find. Without this filter each scanner request would be redirected to a
//! locale-prefixed path and logged as a negotiation.

use once_cell::sync::Lazy;
use regex::RegexSet;

static SCANNER_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
	RegexSet::new([
		// Server-side script extensions.
		r"(?i)\.(php\d?|phtml|asp|aspx|cgi|jsp)$",
		// Dotfiles and dot-directories.
		r"^\.",
		// Framework and admin panel paths.
		r"(?i)^wp-",
		r"(?i)^wordpress$",
		r"(?i)^phpmyadmin",
		r"(?i)^cgi-bin$",
		r"(?i)^xmlrpc",
		r"(?i)^vendor$",
		r"(?i)^actuator$",
		r"(?i)^boaform$",
	])
	.expect("scanner patterns are valid")
});

/// Whether the first segment of `path` looks like a scanner request.
pub fn is_scanner_path(path: &str) -> bool {
	first_segment(path).is_some_and(is_scanner_segment)
}

/// Whether a single path segment looks like a scanner request.
pub fn is_scanner_segment(segment: &str) -> bool {
	!segment.is_empty() && SCANNER_PATTERNS.is_match(segment)
}

fn first_segment(path: &str) -> Option<&str> {
	path.strip_prefix('/')?.split(['/', '?', '#']).next()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_script_extensions() {
		assert!(is_scanner_path("/wp-login.php"));
		assert!(is_scanner_path("/index.PHP"));
		assert!(is_scanner_path("/shell.php7"));
		assert!(is_scanner_path("/default.aspx"));
		assert!(is_scanner_path("/login.asp?x=1"));
		assert!(is_scanner_path("/test.cgi"));
	}

	#[test]
	fn test_dotfiles() {
		assert!(is_scanner_path("/.env"));
		assert!(is_scanner_path("/.git/config"));
		assert!(is_scanner_path("/.aws/credentials"));
	}

	#[test]
	fn test_framework_paths() {
		assert!(is_scanner_path("/wp-admin/"));
		assert!(is_scanner_path("/WordPress"));
		assert!(is_scanner_path("/phpMyAdmin/index"));
		assert!(is_scanner_path("/cgi-bin/luci"));
		assert!(is_scanner_path("/xmlrpc.php"));
		assert!(is_scanner_path("/vendor/phpunit"));
		assert!(is_scanner_path("/actuator/health"));
		assert!(is_scanner_path("/boaform/admin/formLogin"));
	}

	#[test]
	fn test_application_paths_pass() {
		assert!(!is_scanner_path("/"));
		assert!(!is_scanner_path("/en"));
		assert!(!is_scanner_path("/en/dashboard"));
		assert!(!is_scanner_path("/dashboard"));
		assert!(!is_scanner_path("/vendors"));
		assert!(!is_scanner_path("/en/wp-login.php"));
		assert!(!is_scanner_path("/phpinfo-guide"));
	}
}
