//! Scripted transport for driver tests
//!
//! Plays back a queue of display responses. Only a no-op sent as a single
//! exchange consumes the queue; a `0x00` parameter byte inside a long
//! transfer does not. Every other byte is answered with `0x00`, as is a
//! no-op once the queue is empty (the display's idle report).

use std::collections::VecDeque;

use ezlcd_hal::{TransferEnd, Transport};
use ezlcd_protocol::opcodes::NOP;

/// Injected bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: VecDeque<u8>,
    /// Completed transfers in order, one entry per chip select cycle
    pub transfers: Vec<Vec<u8>>,
    /// How many transfers were a single `exchange`
    pub single_exchanges: usize,
    open: Vec<u8>,
    remaining_ok: Option<usize>,
}

impl ScriptedTransport {
    pub fn new(responses: &[u8]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// Fail every exchange after the first `ok` succeed
    pub fn failing_after(ok: usize) -> Self {
        Self {
            remaining_ok: Some(ok),
            ..Default::default()
        }
    }

    /// Check if a long transfer was left open
    pub fn is_selected(&self) -> bool {
        !self.open.is_empty()
    }

    /// Number of no-op exchanges performed
    pub fn nop_count(&self) -> usize {
        self.transfers.iter().filter(|t| t.as_slice() == [NOP]).count()
    }

    /// Transfers other than no-ops
    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.transfers
            .iter()
            .filter(|t| t.as_slice() != [NOP])
            .cloned()
            .collect()
    }

    fn clock(&mut self, byte: u8) -> Result<(), BusFault> {
        if let Some(remaining) = self.remaining_ok.as_mut() {
            if *remaining == 0 {
                return Err(BusFault);
            }
            *remaining -= 1;
        }

        self.open.push(byte);
        Ok(())
    }

    fn close(&mut self) {
        let transfer = std::mem::take(&mut self.open);
        self.transfers.push(transfer);
    }
}

impl Transport for ScriptedTransport {
    type Error = BusFault;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        assert!(!self.is_selected(), "exchange inside an open long transfer");
        self.clock(byte)?;
        let response = if byte == NOP {
            self.responses.pop_front().unwrap_or(0x00)
        } else {
            0x00
        };
        self.single_exchanges += 1;
        self.close();
        Ok(response)
    }

    fn exchange_long(&mut self, byte: u8, end: TransferEnd) -> Result<u8, Self::Error> {
        self.clock(byte)?;
        if end.is_release() {
            self.close();
        }
        Ok(0x00)
    }
}
