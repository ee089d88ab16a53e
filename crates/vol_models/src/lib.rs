//! # vol_models: Analytical Pricing and Delta Volatility Surfaces
//!
//! ## Model Layer Role
//!
//! vol_models sits above `vol_core` in the volkit-rust workspace,
//! providing:
//! - Black-76 pricing for European options on forwards and futures
//!   (`analytical::black76`)
//! - Standard normal distribution helpers behind the pricing formulas
//!   (`analytical::distributions`)
//! - Delta-quoted volatility surfaces with input normalisation and
//!   strike/moneyness lookups via a fixed-point delta solver
//!   (`surfaces::delta`)
//!
//! ## Evaluation Contract
//!
//! The same contract as `vol_core`: construction validates eagerly and
//! returns `Result`, while lookups that merely leave the quoted range
//! answer with a quiet NaN. Solver-backed lookups go one step further
//! and report their convergence state instead of guessing silently.
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_models::analytical::{Black76, OptionType};
//!
//! // European call on a future: F = 100, X = 110, σ√T = 0.2, df = 0.97
//! let call = Black76::new(OptionType::Call, 100.0, 110.0, 0.2, 0.97).unwrap();
//! assert!(call.premium() > 0.0);
//! assert!(call.delta() > 0.0 && call.delta() < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for option types, solver estimates, and
//!   error types (forwards to `vol_core/serde`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod surfaces;
