use credentials::{Error, KeyPair, VerificationResult};
use did_utils::{proof::Proof, vc::VerifiableCredential};
use serde::Serialize;

use crate::DemoConfig;

const RULE: &str = "==================================";

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {err}>"))
}

pub(crate) fn start() {
    println!("🚀 Starting DevFest Mt Kenya SSI Workshop Demo...\n");
    println!("1️⃣ Generating keys for all parties in the Trust Triangle...");
    println!("----------------------------------------");
}

pub(crate) fn party(role: &str, description: &str) {
    println!("\n👤 {role} {description}:");
}

pub(crate) fn key_pair(role: &str, key_pair: &KeyPair) -> Result<(), Error> {
    let exported_private = key_pair.export_private()?;

    println!("\n🔑 Generated {} Key Pair:", role.to_uppercase());
    println!("------------------------");
    println!("DID: {}", key_pair.controller());
    println!("Key ID: {}", key_pair.id());
    println!("Type: {}", key_pair.key_type());

    println!("\n📤 Exported Public Key Info:");
    println!("{}", pretty(&key_pair.export_public()));

    println!("\n🔐 Private Key (Keep this secret!):");
    println!(
        "Private Key Multibase: {}",
        exported_private.private_key_multibase.unwrap_or_default()
    );

    Ok(())
}

pub(crate) fn issuing() {
    println!("\n2️⃣ Creating and issuing workshop attendance credential...");
    println!("ISSUER ➡️ HOLDER");
    println!("\n📜 Issuing credential...");
}

pub(crate) fn credential_before_issuing(credential: &VerifiableCredential) {
    println!("Credential before issuing: {}", pretty(credential));
}

pub(crate) fn issued_proof(proof: &Proof) {
    println!("\nIssued credential proof: {}", pretty(proof));
}

pub(crate) fn issued(credential: &VerifiableCredential) {
    println!("{RULE}");
    println!("✅ Credential issued to holder");
    println!("\nCredential: {}", pretty(credential));
    println!("{RULE}");
}

pub(crate) fn verifying(credential: &VerifiableCredential) {
    println!("\n3️⃣ Verifying credential (HOLDER ➡️ VERIFIER)...");
    println!("\n🔍 Verifying credential...");
    if let Some(proof) = &credential.proof {
        println!("Verification Method: {}", proof.verification_method);
    }
}

pub(crate) fn verified(result: &VerificationResult, config: &DemoConfig) {
    println!("\n✅ Credential successfully verified!");
    println!("Verification result: {}", pretty(result));

    println!("\n🎉 Congratulations! 🎉");
    println!("{RULE}");
    println!("🌟 You have successfully:");
    println!("   ✅ Generated DIDs for all parties");
    println!("   ✅ Created a Verifiable Credential");
    println!("   ✅ Issued the Credential (Issuer ➡️ Holder)");
    println!("   ✅ Verified the Credential (Holder ➡️ Verifier)");

    trust_triangle(config);

    println!("\n🎓 You've completed the SSI Technical Demo!");
    println!("💡 You now understand the basics of:");
    println!("   • DIDs (Decentralized Identifiers)");
    println!("   • VCs (Verifiable Credentials)");
    println!("   • The SSI Trust Triangle");
    println!("\n🚀 Keep building the decentralized future!");
    println!("{RULE}");
}

pub(crate) fn rejected(result: &VerificationResult) {
    println!("\n❌ Verification failed");
    println!("Verification result: {}", pretty(result));
}

fn trust_triangle(config: &DemoConfig) {
    let holder = config
        .participant_name
        .split_whitespace()
        .next()
        .unwrap_or("Holder");

    println!("\n🔷 Trust Triangle Visualization:");
    println!("----------------------------------");
    println!("          ISSUER ({})", config.issuer_name);
    println!("              🏛️");
    println!("             ╱ ╲");
    println!("            ╱   ╲");
    println!("           ╱     ╲");
    println!("          ╱       ╲");
    println!("         ╱         ╲");
    println!("    👤 HOLDER ──── VERIFIER 🔍");
    println!("    ({holder})    Present   (Third Party)");

    println!("\n📝 Flow explanation:");
    println!("1. Issuer ➡️ Holder: Issues credential");
    println!("2. Holder ➡️ Verifier: Presents credential");
    println!("3. Verifier ➡️ Issuer: Verifies signature");
}
