//! Core traits for the injector.

pub mod resolver;

pub use resolver::{Resolver, ResolverCore};
