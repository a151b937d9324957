// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`miette::Result`]. Every fallible operation
/// in this crate that is not a typed diagnostic returns this.
pub type CommonResult<T> = miette::Result<T>;

/// Unit result, for functions that run for their side effects.
///
/// ```
/// use rawkey::{CommonResult, ok};
///
/// fn side_effect() -> CommonResult<()> { ok!() }
/// assert!(side_effect().is_ok());
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
