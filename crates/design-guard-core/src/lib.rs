//! # design-guard-core
//!
//! Core framework for validating UI files against a project's design system.
//!
//! This crate provides the foundational types for the guard. It includes:
//!
//! - [`DesignSystem`] extraction from a design system document
//! - [`Rule`] trait for text-scanning design rules
//! - [`Checker`] for running rules over a file
//! - [`Guard`] for the full post-write pipeline
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use design_guard_core::{Checker, Guard, Outcome};
//!
//! let checker = Checker::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! match Guard::new(".", checker).run(Some(path)) {
//!     Outcome::Checked(result) if result.has_errors() => eprint!("{}", result.format_report()),
//!     _ => {}
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod context;
mod guard;
mod rule;
mod system;
mod types;

pub use checker::{Checker, CheckerBuilder, CheckerError};
pub use config::{
    ConfigError, GuardConfig, GuardSection, RuleConfig, DEFAULT_DESIGN_SYSTEM, DEFAULT_EXTENSIONS,
};
pub use context::FileContext;
pub use guard::{Guard, Outcome, SkipReason};
pub use rule::{Rule, RuleBox};
pub use system::{hex_color_pattern, DepthStrategy, DesignSystem, DEFAULT_SPACING_UNIT};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationKind};
