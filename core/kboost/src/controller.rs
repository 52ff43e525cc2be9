// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use spin::{Mutex, Once};

use crate::{
    config::{PlatformConfig, load_policy_override},
    effect::{BoostEffector, BoostTracer, CapacityQuery, LogTracer},
    error::{BoostError, BoostResult},
    policy::derive_policy,
    refcount::RefcountTable,
    transition::apply_command,
    types::{BoostCommand, BoostKind, BoostPolicy},
};

/// A consistent view of the boost state, taken under the boost lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostSnapshot {
    /// Aggregate boost kind.
    pub kind: BoostKind,
    /// Placement policy derived from `kind`.
    pub policy: BoostPolicy,
    /// Outstanding references per kind.
    pub refcounts: RefcountTable,
}

/// Owner of the scheduler boost state.
///
/// Every mutation goes through [`request`](Self::request) or
/// [`apply`](Self::apply), which run the whole update (refcounts, effects,
/// aggregation, policy, publication, trace) under one lock. The aggregate
/// kind and policy are also published to atomics so placement code can read
/// them without taking the lock; such reads may lag an in-flight request.
pub struct BoostController<E, Q, T = LogTracer> {
    refcounts: Mutex<RefcountTable>,
    kind: AtomicI32,
    policy: AtomicU8,
    policy_override: Once<BoostPolicy>,
    effector: E,
    query: Q,
    tracer: T,
}

impl<E, Q, T> BoostController<E, Q, T>
where
    E: BoostEffector,
    Q: CapacityQuery,
    T: BoostTracer,
{
    /// Creates an idle controller: all counts zero, kind and policy `None`.
    pub const fn new(effector: E, query: Q, tracer: T) -> Self {
        Self {
            refcounts: Mutex::new(RefcountTable::new()),
            kind: AtomicI32::new(BoostKind::None as i32),
            policy: AtomicU8::new(BoostPolicy::None as u8),
            policy_override: Once::new(),
            effector,
            query,
            tracer,
        }
    }

    /// Sets the platform policy override.
    ///
    /// Meant to be called once during boot, before the controller is handed
    /// to any caller. Only the first call takes effect.
    pub fn set_policy_override(&self, policy: BoostPolicy) {
        let current = *self.policy_override.call_once(|| policy);
        if current != policy {
            warn!("sched boost: policy override already set to {current}, ignoring {policy}");
        } else {
            debug!("sched boost: policy override {policy}");
        }
    }

    /// Loads the policy override from platform configuration and applies it
    /// with [`set_policy_override`](Self::set_policy_override).
    pub fn configure<C: PlatformConfig + ?Sized>(&self, config: &C) {
        self.set_policy_override(load_policy_override(config));
    }

    /// The configured policy override, [`BoostPolicy::None`] if there is none.
    pub fn policy_override(&self) -> BoostPolicy {
        self.policy_override.get().copied().unwrap_or_default()
    }

    /// Applies a raw boost command, as written to the `sched_boost` control
    /// point.
    ///
    /// Values outside `BoostCommand::MIN..=BoostCommand::MAX` fail with
    /// [`BoostError::InvalidArgument`] and leave the state untouched.
    pub fn request(&self, value: i32) -> BoostResult {
        let mut refcounts = self.refcounts.lock();
        let cmd = BoostCommand::from_repr(value).ok_or_else(|| {
            warn!("sched boost: rejecting invalid command {value}");
            BoostError::InvalidArgument
        })?;
        self.update(&mut refcounts, cmd);
        Ok(())
    }

    /// Applies a boost command.
    pub fn apply(&self, cmd: BoostCommand) {
        let mut refcounts = self.refcounts.lock();
        self.update(&mut refcounts, cmd);
    }

    fn update(&self, refcounts: &mut RefcountTable, cmd: BoostCommand) {
        let effects = apply_command(refcounts, cmd);
        debug!(
            "sched boost: {cmd} -> refcounts {:?}, effects {:?}",
            refcounts, effects
        );
        for effect in effects {
            effect.apply(&self.effector);
        }

        let kind = refcounts.aggregate();
        let policy = derive_policy(kind, self.policy_override(), &self.query);
        let prev = self.kind.swap(kind as i32, Ordering::Release);
        self.policy.store(policy as u8, Ordering::Release);
        if prev != kind as i32 {
            info!("sched boost: type {kind} ({}), policy {policy}", kind as i32);
        }

        self.tracer.boost_changed(kind);
    }

    /// The aggregate boost kind.
    #[inline]
    pub fn kind(&self) -> BoostKind {
        BoostKind::from_repr(self.kind.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// The current placement policy.
    #[inline]
    pub fn policy(&self) -> BoostPolicy {
        BoostPolicy::from_repr(self.policy.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Outstanding references on `kind`.
    pub fn refcount(&self, kind: BoostKind) -> u32 {
        self.refcounts.lock().get(kind)
    }

    /// Returns kind, policy and refcounts as one consistent view.
    pub fn snapshot(&self) -> BoostSnapshot {
        let refcounts = self.refcounts.lock();
        BoostSnapshot {
            kind: self.kind(),
            policy: self.policy(),
            refcounts: *refcounts,
        }
    }
}

impl<E, Q, T> Default for BoostController<E, Q, T>
where
    E: BoostEffector + Default,
    Q: CapacityQuery + Default,
    T: BoostTracer + Default,
{
    fn default() -> Self {
        Self::new(E::default(), Q::default(), T::default())
    }
}
