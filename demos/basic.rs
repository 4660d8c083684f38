//! Basic example walking the airdrop submit flow.
//!
//! Shows local validation verdicts, then (when an address is supplied)
//! requests a real 2 SOL airdrop from Devnet.
//!
//! Run with: cargo run --example basic -- [address]

use devnet_airdrop::{
    is_valid_address, AirdropRequester, RpcClient, AIRDROP_LAMPORTS, LAMPORTS_PER_SOL,
};

#[tokio::main]
async fn main() {
    println!("╔════════════════════════════════════════════════════╗");
    println!("║           Devnet Airdrop: Submit Flow Demo         ║");
    println!("╚════════════════════════════════════════════════════╝");
    println!();

    // Step 1: validation verdicts for a few representative inputs
    println!("🔎 Step 1: Address validation");
    let zeros = "0".repeat(32);
    let inputs = [
        "",
        "too-short",
        zeros.as_str(),
        "11111111111111111111111111111111",
        "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T",
    ];
    for input in inputs {
        let verdict = if is_valid_address(input) { "✓ valid" } else { "✗ invalid" };
        println!("   {} {:?}", verdict, input);
    }
    println!();

    // Step 2: a full submit cycle against Devnet, when an address is given
    let Some(address) = std::env::args().nth(1) else {
        println!(
            "💧 Step 2: skipped (pass an address to request {} SOL on Devnet)",
            AIRDROP_LAMPORTS / LAMPORTS_PER_SOL
        );
        return;
    };

    println!(
        "💧 Step 2: Requesting {} SOL for {}",
        AIRDROP_LAMPORTS / LAMPORTS_PER_SOL,
        address
    );

    let requester = AirdropRequester::new(RpcClient::devnet());
    requester.set_listener(Box::new(|state, feedback| {
        println!("   [{:?}] {}", state, feedback);
    }));

    requester.on_address_change(&address);
    requester.on_submit().await;
}
