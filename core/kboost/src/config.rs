// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Boot-time boost configuration from the platform device tree.

use crate::types::BoostPolicy;

/// Device tree node holding the scheduler boost properties.
pub const BOOST_NODE_PATH: &str = "/sched-hmp";
/// String property selecting the boost policy override.
pub const BOOST_POLICY_PROP: &str = "boost-policy";

/// Read-only access to platform configuration properties.
///
/// Implemented by the platform on top of its parsed FDT.
pub trait PlatformConfig {
    /// Returns the string value of property `name` on the node at
    /// `node_path`, or `None` if either is missing.
    fn property_str(&self, node_path: &str, name: &str) -> Option<&str>;
}

impl<T: PlatformConfig + ?Sized> PlatformConfig for &T {
    fn property_str(&self, node_path: &str, name: &str) -> Option<&str> {
        (**self).property_str(node_path, name)
    }
}

/// Maps a `boost-policy` property value to a policy override.
///
/// Unknown values mean no override.
pub fn parse_policy_override(value: &str) -> BoostPolicy {
    match value {
        "boost-on-big" => BoostPolicy::OnBigUnits,
        "boost-on-all" => BoostPolicy::OnAllUnits,
        _ => BoostPolicy::None,
    }
}

/// Reads the policy override from platform configuration.
pub fn load_policy_override<C: PlatformConfig + ?Sized>(config: &C) -> BoostPolicy {
    match config.property_str(BOOST_NODE_PATH, BOOST_POLICY_PROP) {
        Some(value) => {
            let policy = parse_policy_override(value);
            if policy == BoostPolicy::None {
                warn!("sched boost: ignoring unknown {BOOST_POLICY_PROP} \"{value}\"");
            }
            policy
        }
        None => BoostPolicy::None,
    }
}
