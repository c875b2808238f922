//! Ferrous Wire Infrastructure Layer
pub mod dns;
