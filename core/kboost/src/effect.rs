// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Side effects of boost transitions and the collaborators that carry them.

use smallvec::SmallVec;

use crate::types::BoostKind;

/// A side effect on another subsystem, produced by a boost transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Turn core-control boost on or off.
    SetCoreBoost(bool),
    /// Turn scheduler frequency aggregation on or off.
    SetFrequencyAggregation(bool),
    /// Restore the default cgroup boost settings.
    RestoreGroupSettings,
    /// Apply the boosted cgroup settings.
    UpdateGroupSettings,
}

impl Effect {
    /// Performs this effect through `effector`.
    pub fn apply<E: BoostEffector + ?Sized>(self, effector: &E) {
        match self {
            Effect::SetCoreBoost(enabled) => effector.set_core_boost(enabled),
            Effect::SetFrequencyAggregation(enabled) => {
                effector.set_frequency_aggregation(enabled)
            }
            Effect::RestoreGroupSettings => effector.restore_group_settings(),
            Effect::UpdateGroupSettings => effector.update_group_settings(),
        }
    }
}

/// Ordered effects of a single command. Clearing everything produces the
/// longest list, four entries.
pub type EffectList = SmallVec<[Effect; 4]>;

/// Subsystems that react to boost transitions.
///
/// Calls are made with the boost lock held, so implementations must not
/// block or call back into the controller.
pub trait BoostEffector {
    /// Core control: keep more cores online while boosted.
    fn set_core_boost(&self, enabled: bool);
    /// Frequency aggregation across related tasks.
    fn set_frequency_aggregation(&self, enabled: bool);
    /// Put cgroup boost settings back to their defaults.
    fn restore_group_settings(&self);
    /// Apply the boosted cgroup settings.
    fn update_group_settings(&self);
}

impl<T: BoostEffector + ?Sized> BoostEffector for &T {
    fn set_core_boost(&self, enabled: bool) {
        (**self).set_core_boost(enabled)
    }

    fn set_frequency_aggregation(&self, enabled: bool) {
        (**self).set_frequency_aggregation(enabled)
    }

    fn restore_group_settings(&self) {
        (**self).restore_group_settings()
    }

    fn update_group_settings(&self) {
        (**self).update_group_settings()
    }
}

/// CPU topology query used to pick a placement policy.
pub trait CapacityQuery {
    /// Returns `true` if the CPUs differ in capacity (big.LITTLE and the
    /// like).
    fn units_heterogeneous(&self) -> bool;
}

impl<T: CapacityQuery + ?Sized> CapacityQuery for &T {
    fn units_heterogeneous(&self) -> bool {
        (**self).units_heterogeneous()
    }
}

/// The minimum and maximum possible CPU efficiency in the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EfficiencyRange {
    /// Efficiency of the least efficient CPU.
    pub min: u32,
    /// Efficiency of the most efficient CPU.
    pub max: u32,
}

impl EfficiencyRange {
    /// Creates a range from the two extremes.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A system where every CPU has the same efficiency.
    pub const fn uniform(efficiency: u32) -> Self {
        Self::new(efficiency, efficiency)
    }
}

impl CapacityQuery for EfficiencyRange {
    fn units_heterogeneous(&self) -> bool {
        self.min != self.max
    }
}

/// Receives one event per applied boost command.
pub trait BoostTracer {
    /// Called with the new aggregate kind.
    fn boost_changed(&self, kind: BoostKind);
}

impl<T: BoostTracer + ?Sized> BoostTracer for &T {
    fn boost_changed(&self, kind: BoostKind) {
        (**self).boost_changed(kind)
    }
}

/// Emits boost events as `log` records on the `sched_boost` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl BoostTracer for LogTracer {
    fn boost_changed(&self, kind: BoostKind) {
        trace!(target: "sched_boost", "sched_set_boost: type={}", kind as i32);
    }
}
