#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Statement-level text helpers for layered-antinomy.
//!
//! Everything in this crate is a pure, total function over `&str`: there is
//! no failure path, and unmatched input falls back to a best-effort answer
//! (first words, empty strings, zero similarity).
//!
//! ## Normalization
//!
//! - [`normalize`] - lowercase, strip `.,;:!?`, collapse whitespace
//! - [`negate`] - heuristic polarity flip via ordered substitution rules
//!
//! ## Extraction
//!
//! - [`extract_subject`] / [`extract_predicate`] - quantifier and copula templates
//! - [`extract_core_proposition`] - strips modal operators and meta-phrases
//! - [`extract_key_terms`] - content words, deduplicated in order
//! - [`extract_action`] - action verb and object of an imperative or modal clause
//!
//! ## Similarity
//!
//! - [`similarity`] - Jaccard coefficient over lowercased word sets
//!
//! ## Example
//!
//! ```
//! use layered_antinomy_text::{normalize, similarity};
//!
//! assert_eq!(normalize("  All swans,  are WHITE! "), "all swans are white");
//! assert_eq!(similarity("the sky is blue", "the sky is blue"), 1.0);
//! ```

mod extract;
mod normalize;
mod similarity;

pub use extract::{
    extract_action, extract_core_proposition, extract_key_terms, extract_predicate,
    extract_subject, ActionPhrase,
};
pub use normalize::{negate, normalize};
pub use similarity::{similarity, SAME_CLAIM_THRESHOLD};
