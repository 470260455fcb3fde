//! Where variable values come from.
//!
//! Accessors never call `std::env` directly. They read through [`ReadEnv`],
//! so production code passes [`SystemEnv`] and tests pass an
//! [`InMemoryEnv`] instead of mutating the process environment.
//!
//! # Examples
//!
//! ```
//! use trogon_env::source::{ReadEnv, SystemEnv};
//!
//! fn database_url<E: ReadEnv>(env: &E) -> String {
//!     env.var("DATABASE_URL")
//!         .unwrap_or_else(|_| "postgres://localhost".to_string())
//! }
//!
//! let url = database_url(&SystemEnv);
//! ```
//!
//! ```ignore
//! use trogon_env::source::InMemoryEnv;
//!
//! let env = InMemoryEnv::new();
//! env.set("DATABASE_URL", "postgres://test"); // &self, no `mut` needed
//!
//! assert_eq!(database_url(&env), "postgres://test");
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;

pub(crate) use read_env::raw_value;
