//! DealScope - Quantitative Decision Engine
//!
//! This crate implements the scoring and projection core of a
//! partnership/investment advisory dashboard: compatibility scoring
//! between an entity profile and candidate opportunities, multi-year
//! financial scenario projection with IRR and payback, and sensitivity
//! analysis. All computation is synchronous and side-effect-free.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
