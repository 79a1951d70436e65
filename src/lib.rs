//! Character-class password generation with strength scoring.
//!
//! The core is a handful of small modules: [`charset`] turns enabled
//! character-class toggles into a concatenated alphabet, [`passgen`] draws
//! random indices into that alphabet to build a password, and [`strength`]
//! maps a password to a discrete strength band. [`engine`] wires the three
//! together behind a UI-agnostic event/frontend contract, [`setclip`] covers
//! clipboard copy and [`configtool`] persists user preferences.
//!
//! # Example
//!
//! ```rust
//! use passmith::charset::ClassToggles;
//! use passmith::passgen::{GenerationConfig, Generator};
//! use passmith::strength::score_password;
//!
//! let config = GenerationConfig {
//!     length: 16,
//!     classes: ClassToggles::default(),
//!     enforce_coverage: true,
//! };
//! let mut generator = Generator::new();
//! let password = generator.generate(&config).unwrap();
//! let strength = score_password(&password);
//! println!("{} ({})", password, strength.label());
//! ```

pub mod charset;
pub mod commands;
pub mod configtool;
pub mod engine;
pub mod passgen;
pub mod setclip;
pub mod strength;
