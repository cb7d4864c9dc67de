use anyhow::Result;
use owo_colors::OwoColorize;
use pawcal_core::session::SessionUser;

use crate::context::Context;

pub fn login(
    ctx: &mut Context,
    token: String,
    user_id: String,
    email: String,
    name: Option<String>,
) -> Result<()> {
    let user = SessionUser {
        id: user_id,
        email,
        name,
        role: None,
    };

    ctx.session.login(token, user)?;
    println!(
        "{} {}",
        "Logged in as".green(),
        ctx.session.user().map(|u| u.email.as_str()).unwrap_or_default()
    );
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    if !ctx.session.is_authenticated() {
        println!("{}", "Not logged in".dimmed());
        return Ok(());
    }

    ctx.session.logout()?;
    println!("{}", "Logged out".green());
    Ok(())
}
