// NNS Ledger Client
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Provides the [Scripted] backend which replays canned replies.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nns_ledger_core::Principal;

use crate::backend::{self, CallError, Channel};

/// [backend::Backend] implementation that answers calls with replies queued in advance and
/// records every call it receives.
///
/// # Differences with real backend
///
/// * Replies are handed out in the order they were queued, regardless of the method called.
///
/// * If no reply is queued the call fails with [CallError::Transport].
///
/// Clones share the same queue and call log.
#[derive(Clone, Default)]
pub struct Scripted {
    state: Arc<Mutex<ScriptedState>>,
}

#[derive(Default)]
struct ScriptedState {
    replies: VecDeque<Result<Vec<u8>, CallError>>,
    calls: Vec<RecordedCall>,
}

/// A call received by a [Scripted] backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedCall {
    pub channel: Channel,
    pub canister_id: Principal,
    pub method: String,
    pub arg: Vec<u8>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply for the next unanswered call.
    pub fn reply(&self, reply: Result<Vec<u8>, CallError>) {
        self.state().replies.push_back(reply);
    }

    pub fn reply_ok(&self, bytes: Vec<u8>) {
        self.reply(Ok(bytes))
    }

    pub fn reject(&self, message: impl Into<String>) {
        self.reply(Err(CallError::Reject {
            message: message.into(),
        }))
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.reply(Err(CallError::Transport(message.into())))
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Number of queued replies that were not handed out yet.
    pub fn pending_replies(&self) -> usize {
        self.state().replies.len()
    }

    fn state(&self) -> MutexGuard<'_, ScriptedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer(
        &self,
        channel: Channel,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            channel,
            canister_id: canister_id.clone(),
            method: method.to_string(),
            arg,
        });
        state.replies.pop_front().unwrap_or_else(|| {
            Err(CallError::Transport(format!(
                "no reply scripted for {}",
                method
            )))
        })
    }
}

#[async_trait::async_trait]
impl backend::Backend for Scripted {
    async fn update(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError> {
        self.answer(Channel::Update, canister_id, method, arg)
    }

    async fn query(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError> {
        self.answer(Channel::Query, canister_id, method, arg)
    }
}
