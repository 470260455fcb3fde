use std::env;

use super::ReadEnv;

/// The real process environment, read through `std::env::var`.
///
/// Zero-sized; pass `&SystemEnv` anywhere a [`ReadEnv`] is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}
