// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Names kept for call sites written against the earlier provider API.
//!
//! Everything here is an alias of an item in [`crate::context`] or
//! [`crate::format`]. New code should use those directly.

pub use crate::context::{
	provide as with_translations, use_locale as current_locale, use_translations as use_t,
	I18nContext as TranslationProvider, Translator as TFunction,
};
pub use crate::format::Args as TArgs;
pub use crate::locale::is_rtl;
