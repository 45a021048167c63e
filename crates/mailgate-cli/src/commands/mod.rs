use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

pub mod email;
pub mod verify;

pub struct Context {
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
