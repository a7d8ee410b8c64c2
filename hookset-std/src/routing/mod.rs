//! # Routing Implementations
//!
//! This module provides the router backends behind [`Router`]:
//!
//! | Router | Use Case | Keys |
//! |--------|----------|------|
//! | `HashMapRouter` | Tables assembled at boot | Any hashable key |
//! | `PhfRouter` | A module's compile-time route table | `&'static str` |
//! | `PathRouter` | URL paths with `{param}` segments | Path patterns |
//!
//! [`Router`]: hookset_core::Router

pub mod hashmap;
pub mod matchit;
pub mod phf;

pub use self::hashmap::{HashMapRouter, HashMapRouterBuilder};
pub use self::matchit::{PathMatch, PathRouter, PathRouterBuilder};
pub use self::phf::PhfRouter;
