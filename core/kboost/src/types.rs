// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use strum::{Display, EnumIter, FromRepr};

use crate::error::BoostError;

/// A boost kind, as stored in the aggregate state.
///
/// The discriminants are the values reported by the `sched_boost` control
/// point.
#[repr(i32)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
pub enum BoostKind {
    /// No boost in effect.
    #[default]
    #[strum(serialize = "none")]
    None         = 0,
    /// Boost everything: core control, frequency aggregation and placement.
    #[strum(serialize = "full-throttle")]
    FullThrottle = 1,
    /// Placement boost for the top-app group only.
    #[strum(serialize = "conservative")]
    Conservative = 2,
    /// Frequency aggregation only, no placement bias.
    #[strum(serialize = "restrained")]
    Restrained   = 3,
}

impl BoostKind {
    /// Kinds that can be enabled, highest priority first.
    pub const ENABLEABLE: [BoostKind; 3] = [
        BoostKind::FullThrottle,
        BoostKind::Conservative,
        BoostKind::Restrained,
    ];

    /// Returns `true` if this kind biases task placement.
    pub const fn biases_placement(self) -> bool {
        matches!(self, BoostKind::FullThrottle | BoostKind::Conservative)
    }
}

/// A request accepted by [`BoostController::request`].
///
/// Positive values enable a kind, negative values disable the kind of the
/// same magnitude, and `0` clears every outstanding request.
///
/// [`BoostController::request`]: crate::BoostController::request
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
pub enum BoostCommand {
    /// Drop one restrained boost reference.
    DisableRestrained   = -3,
    /// Drop one conservative boost reference.
    DisableConservative = -2,
    /// Drop one full-throttle boost reference.
    DisableFullThrottle = -1,
    /// Clear all boost kinds regardless of their counts.
    None                = 0,
    /// Take a full-throttle boost reference.
    EnableFullThrottle  = 1,
    /// Take a conservative boost reference.
    EnableConservative  = 2,
    /// Take a restrained boost reference.
    EnableRestrained    = 3,
}

impl BoostCommand {
    /// Smallest valid raw command value.
    pub const MIN: i32 = BoostCommand::DisableRestrained as i32;
    /// Largest valid raw command value.
    pub const MAX: i32 = BoostCommand::EnableRestrained as i32;

    /// Returns the enable command for `kind`, or the clear command for
    /// [`BoostKind::None`].
    pub const fn enable(kind: BoostKind) -> Self {
        match kind {
            BoostKind::None => BoostCommand::None,
            BoostKind::FullThrottle => BoostCommand::EnableFullThrottle,
            BoostKind::Conservative => BoostCommand::EnableConservative,
            BoostKind::Restrained => BoostCommand::EnableRestrained,
        }
    }

    /// Returns the disable command for `kind`, or the clear command for
    /// [`BoostKind::None`].
    pub const fn disable(kind: BoostKind) -> Self {
        match kind {
            BoostKind::None => BoostCommand::None,
            BoostKind::FullThrottle => BoostCommand::DisableFullThrottle,
            BoostKind::Conservative => BoostCommand::DisableConservative,
            BoostKind::Restrained => BoostCommand::DisableRestrained,
        }
    }

    /// The kind this command acts on, `BoostKind::None` for the clear command.
    pub const fn target(self) -> BoostKind {
        match self {
            BoostCommand::None => BoostKind::None,
            BoostCommand::EnableFullThrottle | BoostCommand::DisableFullThrottle => {
                BoostKind::FullThrottle
            }
            BoostCommand::EnableConservative | BoostCommand::DisableConservative => {
                BoostKind::Conservative
            }
            BoostCommand::EnableRestrained | BoostCommand::DisableRestrained => {
                BoostKind::Restrained
            }
        }
    }

    /// Returns `true` for the three disable commands.
    pub const fn is_disable(self) -> bool {
        (self as i32) < 0
    }
}

impl TryFrom<i32> for BoostCommand {
    type Error = BoostError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(BoostError::InvalidArgument)
    }
}

impl From<BoostCommand> for i32 {
    fn from(cmd: BoostCommand) -> Self {
        cmd as i32
    }
}

/// Which CPUs are eligible for boosted placement.
///
/// When the policy is [`BoostPolicy::None`] the aggregate kind is either
/// [`BoostKind::None`] or [`BoostKind::Restrained`]. For the other policies
/// the kind is neither of those.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
pub enum BoostPolicy {
    /// No placement bias.
    #[default]
    #[strum(serialize = "none")]
    None       = 0,
    /// Only the big (higher capacity) CPUs are eligible.
    #[strum(serialize = "boost-on-big")]
    OnBigUnits = 1,
    /// Every CPU is eligible.
    #[strum(serialize = "boost-on-all")]
    OnAllUnits = 2,
}
