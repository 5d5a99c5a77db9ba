use stakeproof::PrivateKey;

/// Generate a private key and print it with its public key
pub fn execute() {
    let key = PrivateKey::generate();
    println!("privatekey: {}", key.to_hex());
    if let Some(pubkey) = key.public_key() {
        println!("publickey:  {}", pubkey);
    }
}
