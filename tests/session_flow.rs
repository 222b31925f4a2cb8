//! End-to-end session tests against a mock JSON-RPC node.

use std::net::SocketAddr;
use std::rc::Rc;
use std::time::Duration;

use serde_json::{json, Value};

use wallet_height::chain::{NetworkResolver, RpcNetworkClient};
use wallet_height::session::{MemoryView, SessionError, UiState, WalletSession};
use wallet_height::wallet::{HttpWalletProvider, InjectionPoints};

mod common;

const ACCOUNT: &str = "0xAbCdEf1234567890000000000000000000000099";
const TIMEOUT: Duration = Duration::from_secs(5);

fn session_for(wallet: SocketAddr, rpc: SocketAddr) -> WalletSession<MemoryView> {
    session_with_timeout(wallet, rpc, TIMEOUT)
}

fn session_with_timeout(wallet: SocketAddr, rpc: SocketAddr, timeout: Duration) -> WalletSession<MemoryView> {
    let provider = HttpWalletProvider::new("ethereum", &format!("http://{}", wallet), timeout).unwrap();
    let network = RpcNetworkClient::new(&format!("http://{}", rpc), timeout).unwrap();
    WalletSession::new(
        Box::new(InjectionPoints::new().with_ethereum(Rc::new(provider))),
        Box::new(network),
        MemoryView::new(),
    )
}

#[tokio::test]
async fn test_connect_and_read_block_height() {
    let (wallet_addr, wallet_calls) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let (rpc_addr, rpc_calls) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let mut session = session_for(wallet_addr, rpc_addr);

    session.connect().await.unwrap();
    assert_eq!(session.state(), UiState::Connected);
    assert_eq!(session.view().status, "Connected: 0xAbCd...0099");

    let height = session.check_block_height().await.unwrap();
    assert_eq!(height, 50_123_456);
    assert_eq!(session.view().output, "Current block height: 50123456");
    assert_eq!(session.view().status, "Block height fetched successfully");

    assert_eq!(common::methods(&rpc_calls), vec!["eth_chainId"]);
    assert_eq!(
        common::methods(&wallet_calls),
        vec!["eth_requestAccounts", "wallet_switchEthereumChain", "eth_blockNumber"]
    );
    let switch_params = wallet_calls.lock().unwrap()[1].1.clone();
    assert_eq!(switch_params, json!([{ "chainId": "0x89" }]));
}

#[tokio::test]
async fn test_switch_rejected_by_wallet() {
    let (wallet_addr, wallet_calls) = common::start_mock_node(|method: &str, _: &Value| match method {
        "eth_requestAccounts" => Ok(json!([ACCOUNT])),
        "wallet_switchEthereumChain" => Err((4902, "Unrecognized chain ID \"0x89\".".to_string())),
        _ => Ok(json!("0x1")),
    })
    .await;
    let (rpc_addr, _) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let mut session = session_for(wallet_addr, rpc_addr);

    session.connect().await.unwrap();
    let err = session.check_block_height().await.unwrap_err();

    assert!(matches!(err, SessionError::ChainSwitchFailed(_)));
    assert_eq!(
        session.view().status,
        "Error switching network: Unrecognized chain ID \"0x89\"."
    );
    assert_eq!(session.view().output, "");
    assert!(!common::methods(&wallet_calls).contains(&"eth_blockNumber".to_string()));
}

#[tokio::test]
async fn test_user_rejects_connection() {
    let (wallet_addr, _) = common::start_mock_node(|_: &str, _: &Value| {
        Err((4001, "User rejected the request.".to_string()))
    })
    .await;
    let (rpc_addr, _) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let mut session = session_for(wallet_addr, rpc_addr);

    let err = session.connect().await.unwrap_err();

    assert_eq!(
        err,
        SessionError::AuthorizationRejected("User rejected the request.".into())
    );
    assert_eq!(session.state(), UiState::Disconnected);
    assert_eq!(session.view().status, "Error: User rejected the request.");
    assert!(session.view().connect_visible);
}

#[tokio::test]
async fn test_rpc_endpoint_unreachable() {
    let (wallet_addr, wallet_calls) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let rpc_addr = common::closed_port().await;
    let mut session = session_for(wallet_addr, rpc_addr);

    session.connect().await.unwrap();
    let err = session.check_block_height().await.unwrap_err();

    assert!(matches!(err, SessionError::NetworkQueryFailed(_)));
    assert!(session.view().status.starts_with("Error: "));
    assert_eq!(common::methods(&wallet_calls), vec!["eth_requestAccounts"]);
}

#[tokio::test]
async fn test_chain_id_from_endpoint() {
    let (rpc_addr, _) = common::start_mock_node(|method: &str, _: &Value| match method {
        "eth_chainId" => Ok(json!("0x7a69")),
        _ => Err((-32601, "method not found".to_string())),
    })
    .await;
    let client = RpcNetworkClient::new(&format!("http://{}", rpc_addr), TIMEOUT).unwrap();

    let chain_id = client.chain_id().await.unwrap();
    assert_eq!(chain_id.0, 31337);
    assert_eq!(chain_id.to_hex(), "0x7a69");
}

#[tokio::test]
async fn test_hung_wallet_times_out() {
    let wallet_addr = common::start_silent_node().await;
    let (rpc_addr, _) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let mut session = session_with_timeout(wallet_addr, rpc_addr, Duration::from_secs(1));

    let err = session.connect().await.unwrap_err();

    assert!(matches!(err, SessionError::NetworkQueryFailed(_)));
    assert_eq!(session.view().status, "Error: Request timed out after 1 seconds");
    assert_eq!(session.state(), UiState::Disconnected);
}

#[tokio::test]
async fn test_hung_endpoint_times_out() {
    let (wallet_addr, wallet_calls) = common::start_mock_node(common::polygon_node(ACCOUNT)).await;
    let rpc_addr = common::start_silent_node().await;
    let mut session = session_with_timeout(wallet_addr, rpc_addr, Duration::from_secs(1));

    session.connect().await.unwrap();
    let err = session.check_block_height().await.unwrap_err();

    assert!(matches!(err, SessionError::NetworkQueryFailed(_)));
    assert_eq!(session.view().status, "Error: Request timed out after 1 seconds");
    assert_eq!(session.view().output, "");
    assert_eq!(common::methods(&wallet_calls), vec!["eth_requestAccounts"]);
}
