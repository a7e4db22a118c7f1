//! Test that rejects passed on to the caller are logged.
//!
//! Lives in its own test binary because it installs a recording global logger.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

use nns_ledger_client::*;
use nns_ledger_test_utils::*;

struct Recorder;

lazy_static! {
    static ref RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
}

static RECORDER: Recorder = Recorder;

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn init_recorder() {
    let _ = log::set_logger(&RECORDER).map(|()| log::set_max_level(LevelFilter::Debug));
}

/// Return the warnings that mention `text`.
fn warnings_containing(text: &str) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, msg)| *level == Level::Warn && msg.contains(text))
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[async_std::test]
async fn unclassified_transfer_reject_is_logged() {
    init_recorder();
    let (client, backend) = scripted_client();
    let details = format!("canister out of cycles {}", random_hex(16));
    backend.reject(canister_reject(&details));

    let result = client
        .transfer(TransferRequest::new(
            random_account_identifier(),
            random_tokens(),
        ))
        .await;

    assert!(matches!(result, Err(Error::Rejected { .. })));
    assert_eq!(warnings_containing(&details).len(), 1);
}

#[async_std::test]
async fn balance_reject_is_logged() {
    init_recorder();
    let (client, backend) = scripted_client();
    let details = format!("balance unavailable {}", random_hex(16));
    backend.reject(canister_reject(&details));

    let result = client
        .account_balance(&random_account_identifier(), false)
        .await;

    assert!(matches!(result, Err(Error::Rejected { .. })));
    assert_eq!(warnings_containing(&details).len(), 1);
}

#[async_std::test]
async fn balance_transport_error_is_not_logged_as_reject() {
    init_recorder();
    let (client, backend) = scripted_client();
    let details = format!("connection reset {}", random_hex(16));
    backend.fail(details.clone());

    let result = client
        .account_balance(&random_account_identifier(), true)
        .await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(warnings_containing(&details).is_empty());
}
