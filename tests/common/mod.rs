//! Shared test infrastructure for proximity-glow integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use proximity_glow::{Color, LedStrip, ProximitySensor, RandomIndex};

// ============================================================================
// Shared Event Log
// ============================================================================

/// One recorded hardware interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SetPixel(usize, Color),
    Fill(Color),
    Show,
    Brightness(u8),
    DelayMs(u32),
}

/// Ordered log shared between the mock strip and mock delay
pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Events logged so far, leaving the log untouched
pub fn events(log: &EventLog) -> Vec<Event> {
    log.borrow().clone()
}

/// Takes all logged events, leaving the log empty
pub fn drain(log: &EventLog) -> Vec<Event> {
    std::mem::take(&mut *log.borrow_mut())
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock LED strip that records every call
pub struct MockStrip {
    log: EventLog,
}

impl MockStrip {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Color) {
        self.log.borrow_mut().push(Event::SetPixel(index, color));
    }

    fn fill(&mut self, color: Color) {
        self.log.borrow_mut().push(Event::Fill(color));
    }

    fn show(&mut self) {
        self.log.borrow_mut().push(Event::Show);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.log.borrow_mut().push(Event::Brightness(brightness));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested waits instead of sleeping
pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

// ============================================================================
// Mock Sensor
// ============================================================================

/// Mock sensor replaying fixed readings, then repeating the last one
pub struct MockSensor {
    readings: Vec<u16>,
    next: usize,
}

impl MockSensor {
    pub fn new(readings: &[u16]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
        }
    }
}

impl ProximitySensor for MockSensor {
    fn read_raw(&mut self) -> u16 {
        let value = self.readings[self.next.min(self.readings.len() - 1)];
        self.next += 1;
        value
    }
}

// ============================================================================
// Deterministic Random Source
// ============================================================================

/// Random source returning a fixed index sequence, cycling when exhausted
pub struct SequenceRandom {
    indices: Vec<usize>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            next: 0,
        }
    }
}

impl RandomIndex for SequenceRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index % bound
    }
}
