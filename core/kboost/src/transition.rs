// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The boost decision table.
//!
//! Only transitions of a count to or from zero produce effects. Full
//! throttle supersedes the other kinds: while it is held, enabling
//! conservative or restrained boost has no effect of its own, and
//! releasing it re-applies whatever the remaining kinds need.

use crate::{
    effect::{Effect, EffectList},
    refcount::RefcountTable,
    types::{BoostCommand, BoostKind},
};

/// Applies `cmd` to `table` and returns the effects to perform, in order.
///
/// The caller recomputes the aggregate kind afterwards.
pub fn apply_command(table: &mut RefcountTable, cmd: BoostCommand) -> EffectList {
    use BoostKind::{Conservative, FullThrottle, Restrained};

    let mut effects = EffectList::new();
    match cmd {
        BoostCommand::None => {
            if table.clear(FullThrottle) > 0 {
                effects.push(Effect::SetCoreBoost(false));
                effects.push(Effect::SetFrequencyAggregation(false));
            }
            if table.clear(Conservative) > 0 {
                effects.push(Effect::RestoreGroupSettings);
            }
            if table.clear(Restrained) > 0 {
                effects.push(Effect::SetFrequencyAggregation(false));
            }
        }
        BoostCommand::EnableFullThrottle => {
            if table.acquire(FullThrottle) == 1 {
                effects.push(Effect::SetCoreBoost(true));
                effects.push(Effect::RestoreGroupSettings);
                if !table.is_active(Restrained) {
                    effects.push(Effect::SetFrequencyAggregation(true));
                }
            }
        }
        BoostCommand::EnableConservative => {
            if table.acquire(Conservative) == 1 && !table.is_active(FullThrottle) {
                effects.push(Effect::UpdateGroupSettings);
            }
        }
        BoostCommand::EnableRestrained => {
            if table.acquire(Restrained) == 1 && !table.is_active(FullThrottle) {
                effects.push(Effect::SetFrequencyAggregation(true));
            }
        }
        BoostCommand::DisableFullThrottle => {
            if table.release(FullThrottle) == Some(0) {
                effects.push(Effect::SetCoreBoost(false));
                if table.is_active(Conservative) {
                    effects.push(Effect::UpdateGroupSettings);
                }
                if !table.is_active(Restrained) {
                    effects.push(Effect::SetFrequencyAggregation(false));
                }
            }
        }
        BoostCommand::DisableConservative => {
            if table.release(Conservative) == Some(0) {
                effects.push(Effect::RestoreGroupSettings);
            }
        }
        BoostCommand::DisableRestrained => {
            if table.release(Restrained) == Some(0) && !table.is_active(FullThrottle) {
                effects.push(Effect::SetFrequencyAggregation(false));
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(table: &mut RefcountTable, cmd: BoostCommand) -> Vec<Effect> {
        apply_command(table, cmd).into_vec()
    }

    #[test]
    fn test_clear_idle_table_is_silent() {
        let mut table = RefcountTable::new();
        assert!(run(&mut table, BoostCommand::None).is_empty());
        assert_eq!(table, RefcountTable::new());
    }

    #[test]
    fn test_clear_all_kinds() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        table.acquire(BoostKind::FullThrottle);
        table.acquire(BoostKind::Conservative);
        table.acquire(BoostKind::Restrained);
        assert_eq!(
            run(&mut table, BoostCommand::None),
            [
                Effect::SetCoreBoost(false),
                Effect::SetFrequencyAggregation(false),
                Effect::RestoreGroupSettings,
                Effect::SetFrequencyAggregation(false),
            ]
        );
        assert_eq!(table, RefcountTable::new());
    }

    #[test]
    fn test_enable_full_throttle_first_reference() {
        let mut table = RefcountTable::new();
        assert_eq!(
            run(&mut table, BoostCommand::EnableFullThrottle),
            [
                Effect::SetCoreBoost(true),
                Effect::RestoreGroupSettings,
                Effect::SetFrequencyAggregation(true),
            ]
        );
        assert!(run(&mut table, BoostCommand::EnableFullThrottle).is_empty());
        assert_eq!(table.get(BoostKind::FullThrottle), 2);
    }

    #[test]
    fn test_enable_full_throttle_with_restrained_keeps_aggregation() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::Restrained);
        assert_eq!(
            run(&mut table, BoostCommand::EnableFullThrottle),
            [Effect::SetCoreBoost(true), Effect::RestoreGroupSettings]
        );
    }

    #[test]
    fn test_enable_conservative_suppressed_by_full_throttle() {
        let mut table = RefcountTable::new();
        assert_eq!(
            run(&mut table, BoostCommand::EnableConservative),
            [Effect::UpdateGroupSettings]
        );

        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        assert!(run(&mut table, BoostCommand::EnableConservative).is_empty());
        assert_eq!(table.get(BoostKind::Conservative), 1);
    }

    #[test]
    fn test_enable_restrained() {
        let mut table = RefcountTable::new();
        assert_eq!(
            run(&mut table, BoostCommand::EnableRestrained),
            [Effect::SetFrequencyAggregation(true)]
        );
        assert!(run(&mut table, BoostCommand::EnableRestrained).is_empty());

        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        assert!(run(&mut table, BoostCommand::EnableRestrained).is_empty());
    }

    #[test]
    fn test_disable_full_throttle_reapplies_remaining() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        table.acquire(BoostKind::Conservative);
        assert_eq!(
            run(&mut table, BoostCommand::DisableFullThrottle),
            [
                Effect::SetCoreBoost(false),
                Effect::UpdateGroupSettings,
                Effect::SetFrequencyAggregation(false),
            ]
        );

        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        table.acquire(BoostKind::Restrained);
        assert_eq!(
            run(&mut table, BoostCommand::DisableFullThrottle),
            [Effect::SetCoreBoost(false)]
        );
    }

    #[test]
    fn test_disable_only_on_last_reference() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::Conservative);
        table.acquire(BoostKind::Conservative);
        assert!(run(&mut table, BoostCommand::DisableConservative).is_empty());
        assert_eq!(
            run(&mut table, BoostCommand::DisableConservative),
            [Effect::RestoreGroupSettings]
        );
    }

    #[test]
    fn test_disable_restrained_under_full_throttle() {
        let mut table = RefcountTable::new();
        table.acquire(BoostKind::FullThrottle);
        table.acquire(BoostKind::Restrained);
        assert!(run(&mut table, BoostCommand::DisableRestrained).is_empty());
        assert_eq!(table.get(BoostKind::Restrained), 0);

        let mut table = RefcountTable::new();
        table.acquire(BoostKind::Restrained);
        assert_eq!(
            run(&mut table, BoostCommand::DisableRestrained),
            [Effect::SetFrequencyAggregation(false)]
        );
    }

    #[test]
    fn test_disable_without_reference_is_noop() {
        let mut table = RefcountTable::new();
        for cmd in [
            BoostCommand::DisableFullThrottle,
            BoostCommand::DisableConservative,
            BoostCommand::DisableRestrained,
        ] {
            assert!(run(&mut table, cmd).is_empty());
        }
        assert_eq!(table, RefcountTable::new());
    }
}
