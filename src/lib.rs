//! Talent Compass - trait scoring and matching engine
//!
//! This crate turns questionnaire answers into dimension progress, like/talent
//! obviousness, quadrant portraits, challenge matches and major affinity
//! scores.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
