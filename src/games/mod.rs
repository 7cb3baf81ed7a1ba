//! Game implementations.

pub mod gess;
