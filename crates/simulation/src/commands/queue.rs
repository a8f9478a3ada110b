use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ParkingCommand;
use crate::clock::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSource {
    Operator,
    Script,
    Traffic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedCommand {
    /// Earliest simulated time at which the command may run.
    pub at: SimTime,
    pub source: CommandSource,
    pub command: ParkingCommand,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandQueue {
    pending: Vec<QueuedCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, at: SimTime, source: CommandSource, command: ParkingCommand) {
        self.pending.push(QueuedCommand {
            at,
            source,
            command,
        });
    }

    pub fn push_queued(&mut self, queued: QueuedCommand) {
        self.pending.push(queued);
    }

    /// Remove and return every command due at or before `now`, in push order.
    /// Later commands stay queued.
    pub fn drain_due(&mut self, now: SimTime) -> Vec<QueuedCommand> {
        let (due, later): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|queued| queued.at <= now);
        self.pending = later;
        due
    }

    /// Time of the latest pending command, if any.
    pub fn last_due(&self) -> Option<SimTime> {
        self.pending.iter().map(|queued| queued.at).max()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
