use std::io;

use anyhow::Result;
use tracing::info;

use tetrad_proto::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("tetrad starting");

    let stdin = io::stdin();
    let mut session = Session::new(io::stdout().lock());
    session.run(stdin.lock())?;
    Ok(())
}
