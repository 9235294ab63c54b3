//! # steel_core - AISC 360-22 Steel Column Compression Engine
//!
//! `steel_core` computes the axial compression capacity of wide-flange (W)
//! steel columns per AISC 360-22 Chapter E, with a clean, LLM-friendly API.
//! All inputs and outputs are JSON-serializable, making it ideal for
//! integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every result carries a step-by-step derivation report
//!   with equation references
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::compression::{calculate, BracingConfiguration, ColumnInput, DesignMethod, SteelMaterial};
//! use steel_core::sections::builtin_shapes;
//!
//! // W10X33, 10 ft unbraced in all axes, Fy = 50 ksi, ASD
//! let shape = builtin_shapes().lookup("W10X33").unwrap();
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     section: shape.geometry(),
//!     material: SteelMaterial::new(50.0),
//!     bracing: BracingConfiguration::uniform(120.0),
//! };
//!
//! let result = calculate(&input, DesignMethod::Asd).unwrap();
//! assert!((result.design_strength_kips - 220.0).abs() < 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`compression`] - Chapter E capacity engine (flexural, torsional, and
//!   local buckling limit states)
//! - [`design_requirements`] - Chapter B width-to-thickness classification
//! - [`sections`] - W-shape database with filtering and adequate-section
//!   search
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod compression;
pub mod design_requirements;
pub mod errors;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use compression::{calculate, ColumnInput, ColumnResult, DesignMethod};
pub use errors::{CalcError, CalcResult};
pub use sections::{builtin_shapes, WShape, WShapeDb};
