//! Test the ledger calls of the client against a scripted backend.

use nns_ledger_client::backend::RecordedCall;
use nns_ledger_client::*;
use nns_ledger_test_utils::*;

#[async_std::test]
async fn account_balance_certified_uses_update_call() {
    let _ = env_logger::try_init();
    let (client, backend) = scripted_client();
    let account = random_account_identifier();
    let balance = random_tokens();
    backend.reply_ok(balance_reply(balance));

    let fetched = client.account_balance(&account, true).await.unwrap();

    assert_eq!(fetched, balance);
    assert_eq!(
        backend.calls(),
        vec![RecordedCall {
            channel: Channel::Update,
            canister_id: MAINNET_LEDGER_CANISTER_ID.clone(),
            method: "account_balance_pb".to_string(),
            arg: message::encode_balance_request(&account),
        }]
    );
}

#[async_std::test]
async fn account_balance_uncertified_uses_query_call() {
    let _ = env_logger::try_init();
    let (client, backend) = scripted_client();
    backend.reply_ok(balance_reply(Tokens::from_e8s(5)));

    let fetched = client
        .account_balance(&random_account_identifier(), false)
        .await
        .unwrap();

    assert_eq!(fetched, Tokens::from_e8s(5));
    assert_eq!(backend.calls()[0].channel, Channel::Query);
}

#[async_std::test]
async fn account_balance_certified_shorthand() {
    let (client, backend) = scripted_client();
    backend.reply_ok(balance_reply(Tokens::MAX));

    let fetched = client
        .account_balance_certified(&random_account_identifier())
        .await
        .unwrap();

    assert_eq!(fetched, Tokens::MAX);
    assert_eq!(backend.calls()[0].channel, Channel::Update);
}

#[async_std::test]
/// Rejects of the balance call are passed on even if they look like transfer errors.
async fn account_balance_reject_is_not_classified() {
    let (client, backend) = scripted_client();
    let message = canister_reject("transaction is older than 7200 seconds");
    backend.reject(message.clone());

    let result = client
        .account_balance(&random_account_identifier(), true)
        .await;

    match result {
        Err(Error::Rejected { message: rejected }) => assert_eq!(rejected, message),
        other => panic!("Unexpected result {:?}", other),
    }
}

#[async_std::test]
async fn account_balance_malformed_response() {
    let (client, backend) = scripted_client();
    backend.reply_ok(vec![0x08, 0xff]);

    let result = client
        .account_balance(&random_account_identifier(), true)
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
    assert_eq!(backend.calls().len(), 1, "malformed responses are not retried");
}

#[async_std::test]
async fn account_balance_transport_error() {
    for certified in &[true, false] {
        let (client, backend) = scripted_client();
        backend.fail("connection reset");

        let result = client
            .account_balance(&random_account_identifier(), *certified)
            .await;

        match result {
            Err(Error::Transport(message)) => assert_eq!(message, "connection reset"),
            other => panic!("Unexpected result {:?}", other),
        }
        assert_eq!(backend.calls().len(), 1, "transport errors are not retried");
    }
}

#[async_std::test]
async fn transfer_success() {
    let _ = env_logger::try_init();
    let (client, backend) = scripted_client();
    let request = TransferRequest {
        memo: Some(99),
        ..TransferRequest::new(random_account_identifier(), random_tokens())
    };
    backend.reply_ok(transfer_reply(1234));

    let result = client.transfer(request.clone()).await.unwrap();

    assert_eq!(result, Ok(1234));
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].channel, Channel::Update);
    assert_eq!(calls[0].method, "send_pb");
    assert_eq!(calls[0].arg, message::encode_transfer_request(&request));
}

#[async_std::test]
async fn transfer_classified_rejects() {
    let _ = env_logger::try_init();
    let cases = vec![
        (
            "Sending from 2vxsx-fae is not allowed",
            TransferError::InvalidSender,
        ),
        (
            "transaction is a duplicate of another transaction in block 42",
            TransferError::TxDuplicate { duplicate_of: 42 },
        ),
        (
            "the debit account doesn't have enough funds, current balance: 3.5",
            TransferError::InsufficientFunds {
                balance: Tokens::from_e8s(350_000_000),
            },
        ),
        (
            "transaction's created_at_time is in future",
            TransferError::TxCreatedInFuture,
        ),
        (
            "transaction is older than 7200 seconds",
            TransferError::TxTooOld {
                allowed_window_secs: 7200,
            },
        ),
    ];

    for (details, expected) in cases {
        let (client, backend) = scripted_client();
        backend.reject(canister_reject(details));

        let result = client
            .transfer(TransferRequest::new(
                random_account_identifier(),
                random_tokens(),
            ))
            .await
            .unwrap();

        assert_eq!(result, Err(expected), "classifying {:?}", details);
    }
}

#[async_std::test]
async fn transfer_unclassified_reject_keeps_message() {
    let (client, backend) = scripted_client();
    let message = canister_reject("canister is out of cycles");
    backend.reject(message.clone());

    let result = client
        .transfer(TransferRequest::new(
            random_account_identifier(),
            random_tokens(),
        ))
        .await;

    match result {
        Err(Error::Rejected { message: rejected }) => assert_eq!(rejected, message),
        other => panic!("Unexpected result {:?}", other),
    }
}

#[async_std::test]
async fn transfer_transport_error() {
    let (client, backend) = scripted_client();
    backend.fail("connection refused");

    let result = client
        .transfer(TransferRequest::new(
            random_account_identifier(),
            random_tokens(),
        ))
        .await;

    match result {
        Err(Error::Transport(message)) => assert_eq!(message, "connection refused"),
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(backend.calls().len(), 1, "transport errors are not retried");
}

#[async_std::test]
async fn transfer_malformed_response() {
    let (client, backend) = scripted_client();
    backend.reply_ok(vec![0x08]);

    let result = client
        .transfer(TransferRequest::new(
            random_account_identifier(),
            random_tokens(),
        ))
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[async_std::test]
async fn custom_ledger_canister() {
    let backend = backend::Scripted::new();
    let ledger_canister_id = random_principal();
    let client = Client::with_options(
        backend.clone(),
        Options {
            ledger_canister_id: ledger_canister_id.clone(),
            ..Options::default()
        },
    );
    backend.reply_ok(transfer_reply(1));

    client
        .transfer(TransferRequest::new(
            random_account_identifier(),
            random_tokens(),
        ))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(backend.calls()[0].canister_id, ledger_canister_id);
}

#[async_std::test]
/// Calls issued at the same time do not interfere with each other.
async fn concurrent_calls() {
    let (client, backend) = scripted_client();
    for _ in 0..10 {
        backend.reply_ok(balance_reply(Tokens::from_e8s(7)));
    }

    let accounts: Vec<AccountIdentifier> =
        (0..10).map(|_| random_account_identifier()).collect();
    let balances = futures::future::join_all(
        accounts
            .iter()
            .map(|account| client.account_balance(account, false)),
    )
    .await;

    for balance in balances {
        assert_eq!(balance.unwrap(), Tokens::from_e8s(7));
    }
    assert_eq!(backend.calls().len(), 10);
    assert_eq!(backend.pending_replies(), 0);
}
