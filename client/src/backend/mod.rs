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

//! Define trait for client backends and provide the scripted implementation used in tests.
use nns_ledger_core::Principal;

mod scripted;

pub use scripted::{RecordedCall, Scripted};

/// The path a call takes to the canister.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    /// Goes through consensus. The reply is certified but slow.
    Update,
    /// Answered by a single replica. Fast but the reply is not certified.
    Query,
}

/// Error reported by a [Backend] for a failed call.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CallError {
    /// The canister or the replica rejected the call with a message.
    #[error("{message}")]
    Reject { message: String },

    /// The call did not produce a reply, for example because the connection failed.
    #[error("{0}")]
    Transport(String),
}

/// Backend for sending binary calls to canisters.
///
/// Implementations own the identity of the caller as well as the connection. They also decide
/// on timeouts. The client never retries a failed call.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Call `method` on `canister_id` through consensus and return the reply.
    async fn update(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError>;

    /// Call `method` on `canister_id` as a read-only query and return the reply.
    async fn query(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError>;

    /// Dispatch to [Backend::update] or [Backend::query].
    async fn call(
        &self,
        channel: Channel,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, CallError> {
        log::debug!("{:?} call {} on canister {}", channel, method, canister_id);
        match channel {
            Channel::Update => self.update(canister_id, method, arg).await,
            Channel::Query => self.query(canister_id, method, arg).await,
        }
    }
}
