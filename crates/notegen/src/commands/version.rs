pub fn run() -> anyhow::Result<()> {
    println!("notegen {}", env!("CARGO_PKG_VERSION"));
    println!("Extractive notes by cumulative word frequency");
    Ok(())
}
