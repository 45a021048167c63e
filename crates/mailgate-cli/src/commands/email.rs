use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use mailgate_core::Email;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckEmailArgs {
    /// Address to validate
    pub email: String,
}

#[derive(Debug, Serialize)]
struct CheckEmailDto<'a> {
    email: &'a str,
}

pub fn check_email(ctx: &Context, args: CheckEmailArgs) -> Result<()> {
    let email = Email::new(&args.email)?;
    debug!(email = %email, "email accepted");

    if ctx.json {
        print_json(&CheckEmailDto {
            email: email.as_str(),
        })?;
    } else {
        println!("{}", email);
    }
    Ok(())
}
