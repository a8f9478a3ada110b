//! Bounded history of executed parking commands.
//!
//! Each entry records the clock time the command ran at, the command and its
//! result. Only the most recent [`HISTORY_LEN`] entries are kept.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{CommandResult, ParkingCommand};
use crate::clock::SimTime;
use crate::vehicle::Plate;

pub const HISTORY_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub at: SimTime,
    pub command: ParkingCommand,
    pub result: CommandResult,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CommandResultLog {
    entries: VecDeque<LoggedCommand>,
}

impl CommandResultLog {
    pub fn push(&mut self, at: SimTime, command: ParkingCommand, result: CommandResult) {
        if self.entries.len() == HISTORY_LEN {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            at,
            command,
            result,
        });
    }

    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Newest entry whose command equals `command`.
    pub fn latest_for(&self, command: &ParkingCommand) -> Option<&LoggedCommand> {
        self.entries.iter().rev().find(|entry| entry.command == *command)
    }

    /// Park and Leave results for one plate, oldest first.
    pub fn results_for<'a>(
        &'a self,
        plate: &'a Plate,
    ) -> impl Iterator<Item = &'a CommandResult> {
        self.entries
            .iter()
            .filter(move |entry| entry.command.plate() == Some(plate))
            .map(|entry| &entry.result)
    }

    /// Entries that ran at or after `since`.
    pub fn since(&self, since: SimTime) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter().filter(move |entry| entry.at >= since)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
