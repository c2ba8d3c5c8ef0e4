//! Scripted completion driver for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tides_core::GenerateContentRequest;
use tides_error::{CompletionError, CompletionErrorKind, ConfigError, TidesResult};
use tides_interface::CompletionDriver;
use tokio::sync::Notify;

/// One scripted answer.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Step {
    /// Return the text
    Reply(String),
    /// Fail with the error
    Fail(CompletionErrorKind),
    /// Never answer
    Hang,
    /// Wait for the notification, then return the text
    Gated(Arc<Notify>, String),
}

/// Completion driver that plays back a script and records every payload.
///
/// Once the script runs out, every call returns the fallback reply.
pub struct ScriptedDriver {
    script: Mutex<VecDeque<Step>>,
    fallback: String,
    payloads: Arc<Mutex<Vec<GenerateContentRequest>>>,
    ready: bool,
}

#[allow(dead_code)]
impl ScriptedDriver {
    /// Driver that always replies with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: text.into(),
            payloads: Arc::new(Mutex::new(Vec::new())),
            ready: true,
        }
    }

    /// Driver that plays `steps` in order, then replies with `fallback`.
    pub fn scripted(steps: Vec<Step>, fallback: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            ..Self::replying(fallback)
        }
    }

    /// Driver whose credential is missing.
    pub fn unconfigured() -> Self {
        Self {
            ready: false,
            ..Self::replying("unreachable")
        }
    }

    /// Number of times complete() was called.
    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Every payload received so far.
    pub fn payloads(&self) -> Vec<GenerateContentRequest> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, payload: &GenerateContentRequest) -> TidesResult<String> {
        if !self.ready {
            return Err(ConfigError::missing_credential().into());
        }
        self.payloads.lock().unwrap().push(payload.clone());
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Step::Reply(self.fallback.clone()));

        match step {
            Step::Reply(text) => Ok(text),
            Step::Fail(kind) => Err(CompletionError::new(kind).into()),
            Step::Hang => std::future::pending().await,
            Step::Gated(gate, text) => {
                gate.notified().await;
                Ok(text)
            }
        }
    }

    fn check_ready(&self) -> TidesResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(ConfigError::missing_credential().into())
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
