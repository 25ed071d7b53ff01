//! Game implementations.
//!
//! - `combat`: Combat and Recursive Combat

pub mod combat;
