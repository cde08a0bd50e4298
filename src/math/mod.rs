//! Numeric support types shared by the problem generators.

mod linear;
mod polynomial;
mod rational;

pub use linear::LinearExpr;
pub use polynomial::{binomial, ipow, Polynomial};
pub use rational::{gcd, lcm, Rational};
