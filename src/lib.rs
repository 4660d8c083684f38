//! # devnet-airdrop
//!
//! Request a fixed 2 SOL test-network airdrop for a wallet address from a
//! Solana-style JSON-RPC endpoint.
//!
//! The interesting surface is the request/validation/feedback flow:
//! syntactic address validation, a single `requestAirdrop` call, and a small
//! submit state machine that maps the response or error shape into a
//! classified message for whatever presentation layer drives it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devnet_airdrop::{AirdropRequester, RpcClient};
//!
//! # async fn run() {
//! let requester = AirdropRequester::new(RpcClient::devnet());
//!
//! requester.on_address_change("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T");
//! requester.on_submit().await;
//!
//! println!("{}", requester.message());
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - Malformed input never reaches the network
//! - Exactly one call in flight per submit cycle; duplicate submits are
//!   dropped while busy
//! - Every failure is terminal-but-recoverable: no panic, no retry, and the
//!   form stays usable for another attempt

// Module declarations
pub mod address;
pub mod error;
pub mod requester;
pub mod rpc;

// Re-export the core surface
pub use address::{is_valid_address, MAX_ADDRESS_LEN, MIN_ADDRESS_LEN};
pub use error::{AirdropError, Result};
pub use requester::{AirdropRequester, Feedback, RequestState, StateListener};
pub use rpc::{
    AirdropEndpoint, AirdropReply, RpcClient, AIRDROP_LAMPORTS, DEVNET_RPC_URL, LAMPORTS_PER_SOL,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
