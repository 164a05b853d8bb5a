//! Deterministic conversions between degrees and radians.
//!
//! Floating point helpers of the platform math libraries may give results
//! that differ in the last bit from one platform to another.
//! This crate defines the conversions with an explicit formula,
//! an explicit order of operations and a hardcoded value of π,
//! so the same input always produces the same bits.
//!
//! ```
//! use geod_strict::{to_degrees, to_radians, StrictAngle, PI};
//!
//! assert_eq!(to_radians(180.0), PI);
//! assert_eq!(to_radians(90.0), 1.570_796_326_794_896_6);
//! assert_eq!(to_degrees(-PI), -to_degrees(PI));
//!
//! assert_eq!(90.0_f64.strict_to_radians(), to_radians(90.0));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// exact comparisons are the point of the tests
#![cfg_attr(test, allow(clippy::float_cmp, clippy::approx_constant))]

pub use ext::StrictAngle;
pub use strict::{to_degrees, to_radians, HALF_TURN_DEG, PI};

mod ext;
pub mod strict;
