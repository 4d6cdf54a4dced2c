// Path Planning algorithms module

pub mod quintic_polynomials;
pub mod quartic_polynomials;
pub mod frenet;

pub use quintic_polynomials::*;
pub use quartic_polynomials::*;
