//! Generic combinators for groups of fallible futures.

pub mod settle;
pub mod thenable;
