//! Board-agnostic core logic for the Lumen matrix clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Grid coordinate model and neighbor enumeration
//! - Conway's Game of Life engine and epoch controller
//! - Bounded random-walk engine
//! - Hour-of-day brightness policy
//! - Probabilistic display-mode scheduler
//! - Wall-clock value types and clock-face formatting
//!
//! Everything here is pure or driven by an injected `rand::Rng`, so the
//! whole crate tests on the host without any hardware attached.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod brightness;
pub mod clock;
pub mod grid;
pub mod life;
pub mod scheduler;
pub mod walk;
