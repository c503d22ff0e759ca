// pn5180-rs/pn5180/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use crate::transport::traits::{PinController, SpiBus};
use crate::types::{Edge, Level};
use crate::{Error, Result};

/// Recorded state behind a `MockBus`.
#[derive(Debug, Default)]
pub struct MockBusState {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    /// Lengths requested by each `read` call, in order.
    pub read_lengths: Vec<usize>,
    /// Testing hook: number of writes that should fail with a bus error
    pub write_failures: usize,
}

/// Mock SPI bus for unit tests. It records written buffers and returns
/// queued responses. Clones share the same state, so a test can keep one
/// handle while the driver owns the other.
#[derive(Debug, Default, Clone)]
pub struct MockBus {
    state: Rc<RefCell<MockBusState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.state.borrow_mut().responses.push_back(resp);
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    pub fn read_lengths(&self) -> Vec<usize> {
        self.state.borrow().read_lengths.clone()
    }

    pub fn pending_responses(&self) -> usize {
        self.state.borrow().responses.len()
    }

    /// True when the bus saw neither a write nor a read.
    pub fn is_untouched(&self) -> bool {
        let s = self.state.borrow();
        s.sent.is_empty() && s.read_lengths.is_empty()
    }
}

impl SpiBus for MockBus {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(Error::Bus("simulated write failure".into()));
        }
        s.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut s = self.state.borrow_mut();
        s.read_lengths.push(len);
        // No more responses -> Timeout, same as a silent device
        s.responses.pop_front().ok_or(Error::Timeout)
    }
}

/// One observable pin-controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinEvent {
    Input(u8),
    Output(u8, Level),
    Set(u8, Level),
    Release(u8),
    WaitEdge(u8, Edge),
    Delay(Duration),
}

/// Recorded state behind a `MockPins`.
#[derive(Debug, Default)]
pub struct MockPinsState {
    pub events: Vec<PinEvent>,
    /// Current level per pin (outputs as driven, inputs as configured).
    pub levels: HashMap<u8, Level>,
    /// Per-pin levels returned by successive `read_level` calls before
    /// falling back to `levels`.
    pub scripted: HashMap<u8, VecDeque<Level>>,
    /// Results for successive `wait_for_edge` calls; `true` when empty.
    pub edge_results: VecDeque<bool>,
}

/// Mock pin controller. Unknown pins read low; delays are recorded, not
/// slept. Clones share state like `MockBus`.
#[derive(Debug, Default, Clone)]
pub struct MockPins {
    state: Rc<RefCell<MockPinsState>>,
}

impl MockPins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steady level for an input pin.
    pub fn set_input_level(&mut self, pin: u8, level: Level) {
        self.state.borrow_mut().levels.insert(pin, level);
    }

    /// Levels returned by the next `read_level` calls on `pin`.
    pub fn script_levels(&mut self, pin: u8, levels: Vec<Level>) {
        self.state
            .borrow_mut()
            .scripted
            .entry(pin)
            .or_default()
            .extend(levels);
    }

    /// Result of the next `wait_for_edge` call.
    pub fn push_edge_result(&mut self, seen: bool) {
        self.state.borrow_mut().edge_results.push_back(seen);
    }

    pub fn events(&self) -> Vec<PinEvent> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&mut self) {
        self.state.borrow_mut().events.clear();
    }

    pub fn level(&self, pin: u8) -> Option<Level> {
        self.state.borrow().levels.get(&pin).copied()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.state
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                PinEvent::Delay(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl PinController for MockPins {
    fn setup_input(&mut self, pin: u8) -> Result<()> {
        self.state.borrow_mut().events.push(PinEvent::Input(pin));
        Ok(())
    }

    fn setup_output(&mut self, pin: u8, initial: Level) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.events.push(PinEvent::Output(pin, initial));
        s.levels.insert(pin, initial);
        Ok(())
    }

    fn set_level(&mut self, pin: u8, level: Level) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.events.push(PinEvent::Set(pin, level));
        s.levels.insert(pin, level);
        Ok(())
    }

    fn read_level(&mut self, pin: u8) -> Result<Level> {
        let mut s = self.state.borrow_mut();
        if let Some(level) = s.scripted.get_mut(&pin).and_then(|q| q.pop_front()) {
            return Ok(level);
        }
        Ok(s.levels.get(&pin).copied().unwrap_or(Level::Low))
    }

    fn wait_for_edge(&mut self, pin: u8, edge: Edge, _timeout: Duration) -> Result<bool> {
        let mut s = self.state.borrow_mut();
        s.events.push(PinEvent::WaitEdge(pin, edge));
        Ok(s.edge_results.pop_front().unwrap_or(true))
    }

    fn release(&mut self, pin: u8) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.events.push(PinEvent::Release(pin));
        s.levels.remove(&pin);
        Ok(())
    }

    fn delay(&mut self, duration: Duration) {
        self.state
            .borrow_mut()
            .events
            .push(PinEvent::Delay(duration));
    }
}
