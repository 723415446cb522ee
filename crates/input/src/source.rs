//! Input sources sampled by the game loop.
//!
//! `poll_command` never blocks: "nothing pressed" is `Ok(None)`.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::{handle_key_event, is_confirm, should_quit};
use crate::types::GameAction;

/// What the loop can receive from the player in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
}

pub trait InputSource {
    /// Return the next pending event, if any, without waiting.
    fn poll_command(&mut self) -> Result<Option<InputEvent>>;

    /// Block until the player confirms (Enter). Returns false if they quit instead.
    fn wait_for_confirm(&mut self) -> Result<bool>;
}

/// Reads key events from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_command(&mut self) -> Result<Option<InputEvent>> {
        // Skip events that do not map to anything, but leave further
        // commands queued for later ticks.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(Some(InputEvent::Quit));
                }
                if let Some(action) = handle_key_event(key) {
                    return Ok(Some(InputEvent::Action(action)));
                }
            }
        }
        Ok(None)
    }

    fn wait_for_confirm(&mut self) -> Result<bool> {
        loop {
            if let Event::Key(key) = event::read()? {
                if is_confirm(key) {
                    return Ok(true);
                }
                if should_quit(key) {
                    return Ok(false);
                }
            }
        }
    }
}

/// Replays a fixed list of per-tick inputs; `None` entries are idle ticks.
///
/// Once the script runs out every poll returns `Ok(None)`.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    events: VecDeque<Option<InputEvent>>,
    confirm: bool,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            confirm: true,
        }
    }

    /// Script from actions only.
    pub fn actions(actions: impl IntoIterator<Item = Option<GameAction>>) -> Self {
        Self::new(actions.into_iter().map(|a| a.map(InputEvent::Action)))
    }

    /// Answer the game-over prompt with quit instead of Enter.
    pub fn declining_confirm(mut self) -> Self {
        self.confirm = false;
        self
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InputSource for ScriptedInput {
    fn poll_command(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front().flatten())
    }

    fn wait_for_confirm(&mut self) -> Result<bool> {
        Ok(self.confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_yields_in_order_then_idles() {
        let mut input = ScriptedInput::actions([
            Some(GameAction::MoveLeft),
            None,
            Some(GameAction::HardDrop),
        ]);
        assert_eq!(
            input.poll_command().unwrap(),
            Some(InputEvent::Action(GameAction::MoveLeft))
        );
        assert_eq!(input.poll_command().unwrap(), None);
        assert_eq!(
            input.poll_command().unwrap(),
            Some(InputEvent::Action(GameAction::HardDrop))
        );
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.poll_command().unwrap(), None);
    }

    #[test]
    fn scripted_confirm_can_decline() {
        assert!(!ScriptedInput::default()
            .declining_confirm()
            .wait_for_confirm()
            .unwrap());
        assert!(ScriptedInput::default().wait_for_confirm().unwrap());
    }
}
