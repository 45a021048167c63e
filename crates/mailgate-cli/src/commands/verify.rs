use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use mailgate_core::{verify_credentials, SUCCESS_MESSAGE};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Address to verify
    pub email: String,
    /// Password to check against the expected value
    pub password: String,
}

#[derive(Debug, Serialize)]
struct VerifyDto<'a> {
    email: &'a str,
    message: &'a str,
}

pub fn verify(ctx: &Context, args: VerifyArgs) -> Result<()> {
    // Never logged: the password stays inside the check.
    let email = verify_credentials(&args.email, &args.password)?;
    debug!(email = %email, "credentials accepted");

    if ctx.json {
        print_json(&VerifyDto {
            email: email.as_str(),
            message: SUCCESS_MESSAGE,
        })?;
    } else {
        println!("{SUCCESS_MESSAGE}");
    }
    Ok(())
}
