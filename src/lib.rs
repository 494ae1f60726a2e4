//! # Turify
//!
//! Grow Turing-pattern-like artifacts out of ordinary images by repeatedly
//! blurring and resharpening them. Each round applies a Gaussian blur followed
//! by an unsharp mask; after enough rounds the feedback between the two filters
//! settles into organic stripe-and-spot structures reminiscent of
//! reaction-diffusion patterns.
//!
//! # Pipeline
//!
//! ```text
//! open      path → bitmap      (decode, optional shrink, optional grayscale)
//! turify    bitmap → bitmap    (iterations × [gaussian blur → unsharp mask])
//! save      bitmap → path      (encode, format from extension)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`params`] | [`TurifyParams`](params::TurifyParams) — run configuration with documented defaults and the derived sharpen radius |
//! | [`session`] | [`TuringSession`](session::TuringSession) — owns the bitmap, runs the filter loop, saves/shows the result |
//! | [`filters`] | Pure pixel operations: Gaussian blur, percent-strength unsharp mask, shrink-dimension math |
//! | [`output`] | Verbose-progress line formatting — pure string functions, printed at call sites |
//!
//! # Design Decisions
//!
//! ## One Bitmap, One Session
//!
//! A [`TuringSession`](session::TuringSession) owns exactly one in-memory
//! bitmap and mutates it in place with each filter call. There is no implicit
//! state beyond the bitmap itself: every transition (blur, sharpen, save) is
//! caller-driven, and filter methods return `&mut Self` so runs read as a
//! chain (`session.turify().save(out)`).
//!
//! ## Pure-Rust Imaging
//!
//! All decoding, encoding, blurring, and resizing comes from the `image`
//! crate — no ImageMagick, no system libraries, a fully self-contained binary.
//! The `image` crate has no percent-strength unsharp mask, so
//! [`filters::unsharp_mask`] builds one from the crate's Gaussian blur:
//! the classic `orig + amount * (orig - blurred)` blend with a zero threshold.
//!
//! ## Explicit Configuration Struct
//!
//! All knobs live in [`TurifyParams`](params::TurifyParams) with defaults
//! defined once, in the library. The CLI only overrides fields for flags the
//! user actually passed, so omitted flags always fall through to the library
//! defaults rather than being duplicated in `clap` attributes. Verbosity is a
//! field on the params, not ambient global state.

pub mod filters;
pub mod output;
pub mod params;
pub mod session;
