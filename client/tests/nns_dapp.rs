//! Test creating named sub-accounts through the NNS dapp canister.

use nns_ledger_client::*;
use nns_ledger_test_utils::*;

#[async_std::test]
async fn create_sub_account_ok() {
    let _ = env_logger::try_init();
    let (client, backend) = scripted_client();
    let details = sub_account_details("savings");
    backend.reply_ok(create_sub_account_reply(CreateSubAccountResponse::Ok(
        details.clone(),
    )));

    let created = client.create_sub_account("savings").await.unwrap();

    assert_eq!(created, details);
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "create_sub_account");
    assert_eq!(calls[0].channel, Channel::Update);
    assert_eq!(calls[0].canister_id, MAINNET_NNS_DAPP_CANISTER_ID.clone());
    assert_eq!(
        candid::decode_one::<String>(&calls[0].arg).unwrap(),
        "savings"
    );
}

#[async_std::test]
async fn create_sub_account_registers_unknown_account() {
    let _ = env_logger::try_init();
    let (client, backend) = scripted_client();
    let details = sub_account_details("savings");
    backend.reply_ok(create_sub_account_reply(
        CreateSubAccountResponse::AccountNotFound,
    ));
    backend.reply_ok(candid::encode_args(()).unwrap());
    backend.reply_ok(create_sub_account_reply(CreateSubAccountResponse::Ok(
        details.clone(),
    )));

    let created = client.create_sub_account("savings").await.unwrap();

    assert_eq!(created, details);
    let methods: Vec<String> = backend.calls().into_iter().map(|call| call.method).collect();
    assert_eq!(
        methods,
        vec!["create_sub_account", "add_account", "create_sub_account"]
    );
}

#[async_std::test]
/// If the account is still unknown after registering it we give up after the second attempt.
async fn create_sub_account_gives_up_after_two_attempts() {
    let (client, backend) = scripted_client();
    for _ in 0..3 {
        backend.reply_ok(create_sub_account_reply(
            CreateSubAccountResponse::AccountNotFound,
        ));
        backend.reply_ok(candid::encode_args(()).unwrap());
    }

    let result = client.create_sub_account("savings").await;

    assert!(matches!(result, Err(Error::AccountNotFound)));
    let methods: Vec<String> = backend.calls().into_iter().map(|call| call.method).collect();
    assert_eq!(
        methods,
        vec!["create_sub_account", "add_account", "create_sub_account"]
    );
}

#[async_std::test]
async fn create_sub_account_name_too_long() {
    let (client, backend) = scripted_client();
    backend.reply_ok(create_sub_account_reply(
        CreateSubAccountResponse::NameTooLong,
    ));

    let name = "a".repeat(100);
    let result = client.create_sub_account(&name).await;

    match result {
        Err(Error::NameTooLong { name: rejected }) => assert_eq!(rejected, name),
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(backend.calls().len(), 1);
}

#[async_std::test]
async fn create_sub_account_limit_exceeded() {
    let (client, backend) = scripted_client();
    backend.reply_ok(create_sub_account_reply(
        CreateSubAccountResponse::SubAccountLimitExceeded,
    ));

    let result = client.create_sub_account("one too many").await;

    assert!(matches!(result, Err(Error::SubAccountLimitExceeded)));
}

#[async_std::test]
async fn create_sub_account_add_account_rejected() {
    let (client, backend) = scripted_client();
    backend.reply_ok(create_sub_account_reply(
        CreateSubAccountResponse::AccountNotFound,
    ));
    backend.reject("Reject code: 4, caller is anonymous");

    let result = client.create_sub_account("savings").await;

    assert!(matches!(result, Err(Error::Rejected { .. })));
    assert_eq!(backend.calls().len(), 2);
}

#[async_std::test]
async fn create_sub_account_malformed_reply() {
    let (client, backend) = scripted_client();
    backend.reply_ok(vec![1, 2, 3]);

    let result = client.create_sub_account("savings").await;

    match result {
        Err(error @ Error::Candid(_)) => {
            assert!(error.to_string().starts_with("Candid encoding or decoding for the NNS dapp failed"))
        }
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(backend.calls().len(), 1, "malformed replies are not retried");
}
