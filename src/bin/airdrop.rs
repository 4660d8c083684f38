//! Devnet airdrop CLI.
//!
//! A minimal presentation layer over the airdrop requester: forwards the
//! address and submit intents, prints each feedback transition.
//!
//! Usage:
//!   cargo run --bin airdrop -- --address <pubkey> [--url <rpc-url>] [--wait] [--balance]

use std::env;
use std::process;

use devnet_airdrop::{AirdropRequester, RpcClient, DEVNET_RPC_URL};

/// Environment variable overriding the RPC endpoint.
const ENV_RPC_URL: &str = "AIRDROP_RPC_URL";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut address = String::new();
    let mut url = String::new();
    let mut wait = false;
    let mut balance = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--address" => {
                if i + 1 < args.len() {
                    address = args[i + 1].clone();
                    i += 1;
                }
            }
            "--url" => {
                if i + 1 < args.len() {
                    url = args[i + 1].clone();
                    i += 1;
                }
            }
            "--wait" => wait = true,
            "--balance" => balance = true,
            _ => {}
        }
        i += 1;
    }

    if address.is_empty() {
        eprintln!("Usage: airdrop --address <pubkey> [--url <rpc-url>] [--wait] [--balance]");
        process::exit(1);
    }

    if url.is_empty() {
        url = env::var(ENV_RPC_URL).unwrap_or_else(|_| DEVNET_RPC_URL.to_string());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let requester = AirdropRequester::new(RpcClient::new(&url));
    requester.set_listener(Box::new(|_, feedback| {
        if !feedback.is_empty() {
            println!("{}", feedback);
        }
    }));

    requester.on_address_change(&address);
    requester.on_submit().await;

    let client = RpcClient::new(&url);

    if wait {
        if let Some(signature) = requester.last_signature() {
            println!("Waiting for confirmation...");
            match client.confirm_transaction(&signature).await {
                Ok(true) => println!("Transaction confirmed."),
                Ok(false) => println!("Transaction not confirmed within the polling window."),
                Err(e) => eprintln!("Confirmation check failed: {}", e),
            }
        }
    }

    if balance {
        match client.get_balance(&requester.address()).await {
            Ok(lamports) => println!("Balance: {} lamports", lamports),
            Err(e) => eprintln!("Balance lookup failed: {}", e),
        }
    }

    if requester.feedback().is_error() {
        process::exit(1);
    }
}
