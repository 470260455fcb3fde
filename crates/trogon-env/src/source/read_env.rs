use std::env::VarError;

/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// `None` when `name` is unset or set to the empty string.
///
/// Non-UTF-8 values are decoded lossily and count as present.
pub(crate) fn raw_value<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Option<String> {
    let raw = match env.var(name) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return None,
        Err(VarError::NotUnicode(os)) => os.to_string_lossy().into_owned(),
    };
    if raw.is_empty() { None } else { Some(raw) }
}
