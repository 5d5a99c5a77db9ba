/// Display version information
pub fn execute() {
    println!("stakeproof {}", env!("CARGO_PKG_VERSION"));
    println!("Signed stake proof builder");
}
