// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP integration for the Lingo i18n engine.
//!
//! - [`LocaleLayer`] negotiates the locale of each request from the URL prefix,
//!   the `locale` cookie and `Accept-Language`, redirecting unprefixed paths
//!   and rejecting scanner requests.
//! - [`RequestLocale`] and [`I18n`] extract the negotiated locale and its
//!   messages inside handlers.
//! - [`redirect_localized`] keeps redirects on the negotiated locale.

pub mod accept_language;
pub mod cookie;
pub mod denylist;
mod error;
mod extract;
mod layer;
pub mod negotiate;
mod redirect;

pub use accept_language::{parse_accept_language, LanguageRange};
pub use cookie::{locale_cookie_header, LOCALE_COOKIE_MAX_AGE_SECONDS, LOCALE_COOKIE_NAME};
pub use error::{ErrorResponse, ExtractError};
pub use extract::{I18n, LoadStrategy, RequestLocale};
pub use layer::{LocaleFuture, LocaleLayer, LocaleService};
pub use negotiate::{classify_path, negotiate, preferred_locale, Decision, PathState};
pub use redirect::redirect_localized;
