//! Configuration of delegated tools

pub mod generator;

pub use generator::generator_invocation;
