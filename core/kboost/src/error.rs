// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Boost error type.

use core::fmt;

use linux_raw_sys::errno::EINVAL;

/// Errors returned by the boost controller and its control point.
///
/// Disabling a kind that is not enabled is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostError {
    /// The command value is outside `BoostCommand::MIN..=BoostCommand::MAX`.
    InvalidArgument,
}

impl BoostError {
    /// Returns the negative Linux errno for this error.
    pub const fn errno(self) -> i32 {
        match self {
            BoostError::InvalidArgument => -(EINVAL as i32),
        }
    }
}

impl fmt::Display for BoostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostError::InvalidArgument => write!(f, "invalid boost command"),
        }
    }
}

impl core::error::Error for BoostError {}

/// A specialized [`Result`] for boost operations.
pub type BoostResult<T = ()> = Result<T, BoostError>;
