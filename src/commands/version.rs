use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("taskbar version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
