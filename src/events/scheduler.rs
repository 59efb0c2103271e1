// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The one-second tick source.
//!
//! Ticks are not produced by a free-running interval. Each call to
//! [`TickScheduler::schedule`] delivers exactly one [`AppEvent::Tick`] a
//! second later, and the event loop decides on every tick whether to arm the
//! next one. Stopping the countdown therefore only requires not re-arming.

use std::{sync::mpsc::Sender, thread, time::Duration};

use crate::events::AppEvent;

pub(crate) const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) trait TickScheduler {
    /// Arms a single tick tagged with `epoch`.
    fn schedule(&self, epoch: u64);
}

impl TickScheduler for Sender<AppEvent> {
    fn schedule(&self, epoch: u64) {
        let tx = self.clone();
        thread::spawn(move || {
            thread::sleep(TICK_INTERVAL);
            // The receiver is gone once the application has exited
            let _ = tx.send(AppEvent::Tick(epoch));
        });
    }
}
