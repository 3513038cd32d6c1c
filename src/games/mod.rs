//! Game implementations.

pub mod endgame;
