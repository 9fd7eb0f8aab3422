//! In-memory door controller for exercising accessories without a network.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use garagesync_api::models::DoorPosition;

use crate::errors::ControllerError;
use crate::services::{DoorController, position_from_payload};

/// Answers status with a scripted raw payload and records every call.
///
/// A successful toggle flips the payload between `open` and `closed`, like a
/// door that finishes travelling instantly.
pub struct ScriptedController {
    payload: Mutex<String>,
    status_calls: AtomicUsize,
    toggle_calls: AtomicUsize,
    fail_status: AtomicBool,
    fail_toggle: AtomicBool,
}

impl ScriptedController {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: Mutex::new(payload.to_string()),
            status_calls: AtomicUsize::new(0),
            toggle_calls: AtomicUsize::new(0),
            fail_status: AtomicBool::new(false),
            fail_toggle: AtomicBool::new(false),
        }
    }

    pub fn set_payload(&self, payload: &str) {
        *self.payload.lock().unwrap_or_else(PoisonError::into_inner) = payload.to_string();
    }

    pub fn payload(&self) -> String {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn fail_status(&self, fail: bool) {
        self.fail_status.store(fail, Ordering::SeqCst);
    }

    pub fn fail_toggle(&self, fail: bool) {
        self.fail_toggle.store(fail, Ordering::SeqCst);
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn toggle_calls(&self) -> usize {
        self.toggle_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DoorController for ScriptedController {
    async fn status(&self) -> Result<DoorPosition, ControllerError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_status.load(Ordering::SeqCst) {
            return Err(ControllerError::Unavailable);
        }

        Ok(position_from_payload(&self.payload()))
    }

    async fn toggle(&self) -> Result<(), ControllerError> {
        self.toggle_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_toggle.load(Ordering::SeqCst) {
            return Err(ControllerError::Unavailable);
        }

        let toggled = DoorPosition::from_payload(&self.payload()).toggled();
        self.set_payload(toggled.as_payload());

        Ok(())
    }
}
