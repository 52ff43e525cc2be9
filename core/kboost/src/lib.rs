// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Scheduler boost.
//!
//! Boost is a mechanism to temporarily place tasks on CPUs with higher
//! capacity than those a task would normally end up on given its load.
//! Several independent callers (the `sched_boost` control point, kernel
//! subsystems) may ask for different boost kinds at the same time; each
//! kind is reference counted and the highest-priority active kind becomes
//! the aggregate [`BoostKind`] seen by the rest of the scheduler.
//!
//! Any entity enabling a boost kind is responsible for disabling it again.
//!
//! ```text
//!   request(i32) ──► BoostCommand ──► transition::apply_command
//!                                          │ EffectList
//!                                          ▼
//!   RefcountTable ──► aggregate ──► derive_policy ──► publish + trace
//! ```
//!
//! The side effects on other subsystems (core control, frequency
//! aggregation, cgroup boost settings) go through a [`BoostEffector`]
//! supplied by the integrator.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod config;
mod controller;
mod effect;
mod error;
mod policy;
mod refcount;
mod sysctl;
mod transition;
mod types;

pub use config::{
    BOOST_NODE_PATH, BOOST_POLICY_PROP, PlatformConfig, load_policy_override,
    parse_policy_override,
};
pub use controller::{BoostController, BoostSnapshot};
pub use effect::{
    BoostEffector, BoostTracer, CapacityQuery, Effect, EffectList, EfficiencyRange, LogTracer,
};
pub use error::{BoostError, BoostResult};
pub use policy::derive_policy;
pub use refcount::RefcountTable;
pub use sysctl::BoostSysctl;
pub use transition::apply_command;
pub use types::{BoostCommand, BoostKind, BoostPolicy};
