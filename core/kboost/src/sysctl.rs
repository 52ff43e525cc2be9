// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The `sched_boost` control point.

use core::fmt::{self, Write};

use crate::{
    controller::BoostController,
    effect::{BoostEffector, BoostTracer, CapacityQuery},
    error::{BoostError, BoostResult},
    types::BoostCommand,
};

/// Integer control point in front of a [`BoostController`].
///
/// Writes take a raw [`BoostCommand`] value; reads return the aggregate
/// boost kind.
pub struct BoostSysctl<'a, E, Q, T> {
    controller: &'a BoostController<E, Q, T>,
}

impl<'a, E, Q, T> BoostSysctl<'a, E, Q, T>
where
    E: BoostEffector,
    Q: CapacityQuery,
    T: BoostTracer,
{
    /// Name of the control entry.
    pub const NAME: &'static str = "sched_boost";
    /// Smallest accepted value.
    pub const MIN: i32 = BoostCommand::MIN;
    /// Largest accepted value.
    pub const MAX: i32 = BoostCommand::MAX;

    /// Wraps `controller`.
    pub const fn new(controller: &'a BoostController<E, Q, T>) -> Self {
        Self { controller }
    }

    /// Returns the aggregate boost kind.
    pub fn read(&self) -> i32 {
        self.controller.kind() as i32
    }

    /// Writes a raw command value.
    pub fn write(&self, value: i32) -> BoostResult {
        self.controller.request(value)
    }

    /// Writes a command in text form, e.g. `b"-1\n"`.
    ///
    /// Returns the number of bytes consumed. Anything that is not a single
    /// decimal integer in `MIN..=MAX` is rejected without touching the state.
    pub fn write_bytes(&self, buf: &[u8]) -> BoostResult<usize> {
        let value = parse_value(buf)?;
        self.write(value)?;
        Ok(buf.len())
    }

    /// Formats the aggregate kind followed by a newline into `buf`.
    ///
    /// Output that does not fit is truncated. Returns the bytes written.
    pub fn read_bytes(&self, buf: &mut [u8]) -> usize {
        let mut out = SliceWriter { buf, len: 0 };
        // SliceWriter never fails, it truncates.
        let _ = writeln!(out, "{}", self.read());
        out.len
    }
}

fn parse_value(buf: &[u8]) -> BoostResult<i32> {
    let text = core::str::from_utf8(buf)
        .map_err(|_| BoostError::InvalidArgument)?
        .trim_ascii();
    text.parse::<i32>().map_err(|_| BoostError::InvalidArgument)
}

struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.len;
        let n = s.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}
