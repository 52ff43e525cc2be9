// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use crate::{
    effect::CapacityQuery,
    types::{BoostKind, BoostPolicy},
};

/// Derives the placement policy for the aggregate `kind`.
///
/// Kinds that do not bias placement always map to [`BoostPolicy::None`].
/// Otherwise a configured `override_policy` wins, and without one the
/// topology decides: big CPUs only on asymmetric systems, all CPUs on
/// symmetric ones. `query` is not consulted unless needed.
pub fn derive_policy<Q: CapacityQuery + ?Sized>(
    kind: BoostKind,
    override_policy: BoostPolicy,
    query: &Q,
) -> BoostPolicy {
    if !kind.biases_placement() {
        return BoostPolicy::None;
    }
    if override_policy != BoostPolicy::None {
        return override_policy;
    }
    if query.units_heterogeneous() {
        BoostPolicy::OnBigUnits
    } else {
        BoostPolicy::OnAllUnits
    }
}
