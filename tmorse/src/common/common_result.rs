// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The typed errors of each stage ([`crate::ConfigError`], [`crate::InputError`],
//! [`crate::EncodeError`], [`crate::DriveError`]) all implement [`miette::Diagnostic`],
//! so they compose into a single [`CommonResult`] at the binary edge with `?`.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which wrap any [`std::error::Error`].
pub type CommonResult<T> = miette::Result<T>;

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
