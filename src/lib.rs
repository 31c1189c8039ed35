//! Lineal: dimension-checked linear algebra in pure Rust.
//!
//! Lineal provides fixed-size [`Vector`](primitives::Vector) and
//! [`Matrix`](primitives::Matrix) containers, generic over any numeric
//! scalar, with every shape contract enforced through explicit errors
//! instead of panics. The companion `lineal` binary drives the same
//! operations through nested console menus.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0f64, 7.0, 2.0, 6.0]).unwrap();
//! let inv = a.inverse().unwrap();
//!
//! // A * inv(A) is the identity
//! let product = a.matmul(&inv).unwrap();
//! assert!((product.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
//! assert!(product.get(0, 1).unwrap().abs() < 1e-12);
//!
//! // shape violations are errors, not panics
//! let b = Matrix::<f64>::zeros(3, 3);
//! assert!(a.add(&b).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error taxonomy and `Result` alias
//! - [`traits`]: Scalar capability traits

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod traits;
