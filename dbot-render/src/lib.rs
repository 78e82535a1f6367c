//! Rendering of aggregated lookups into inline results.
//!
//! Everything here is pure and deterministic: the same [`dbot_core::LookupResult`] always
//! renders to byte-identical output.
//!
//! - [`sanitize`]: HTML escaping, truncation, whitespace and link helpers.
//! - [`brief`]: one-line descriptions.
//! - [`dictionary`], [`lexical`], [`slang`]: basic/detailed bodies per source.
//! - [`result_list`]: ordered, capped list of [`dbot_core::RenderedResult`].

pub mod brief;
pub mod dictionary;
pub mod lexical;
pub mod result_list;
pub mod sanitize;
pub mod slang;

pub use brief::{render_brief, NO_DEFINITION};
pub use result_list::{
    build_result_list, not_found_result, should_offer_detailed, RenderSettings, MAX_RESULTS,
    PRIMARY_SLOTS,
};
pub use sanitize::{clip_body, escape_html, MAX_BODY_CHARS};
pub use slang::{render_slang_entry, DEFAULT_SLANG_SITE_URL};

use dbot_core::LookupResult;

/// Renders the basic body of the primary source, or `None` for slang-only / not found.
pub fn render_basic(result: &LookupResult, word: &str) -> Option<String> {
    match result {
        LookupResult::Dictionary { entry, .. } => {
            Some(dictionary::render_basic(entry, word))
        }
        LookupResult::Lexical { senses, .. } => Some(lexical::render_basic(senses, word)),
        LookupResult::SlangOnly { .. } | LookupResult::NotFound => None,
    }
}

/// Renders the detailed body of the primary source, or `None` for slang-only / not found.
pub fn render_detailed(result: &LookupResult, word: &str) -> Option<String> {
    match result {
        LookupResult::Dictionary { entry, .. } => {
            Some(dictionary::render_detailed(entry, word))
        }
        LookupResult::Lexical { senses, .. } => {
            Some(lexical::render_detailed(senses, word))
        }
        LookupResult::SlangOnly { .. } | LookupResult::NotFound => None,
    }
}
