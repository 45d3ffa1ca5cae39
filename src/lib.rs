//! TOPSIS Ranker - Multi-criteria ranking of alternatives
//!
//! This crate scores and ranks alternatives described by numeric criteria
//! using TOPSIS (Technique for Order Preference by Similarity to Ideal
//! Solution). Input arrives as an in-memory table plus weight and impact
//! strings; output is a score and rank per alternative.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
