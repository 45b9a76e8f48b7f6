//! Login and registration commands.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password, Select};
use storefront_app::screens::RegisterForm;

use super::{AccountArgs, AccountCommand};
use crate::context::Context;

/// Run the account command.
pub async fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AccountCommand::Login { username, password } => login(username, password, ctx).await,
        AccountCommand::Register {
            name,
            username,
            email,
            phone,
            address,
            gender,
        } => {
            let form = RegisterForm {
                name: prompt_missing("Full name", name)?,
                username: prompt_missing("Username", username)?,
                email: prompt_missing("Email", email)?,
                phone: prompt_missing("Phone", phone)?,
                address: prompt_missing("Address", address)?,
                gender: match gender {
                    Some(gender) => gender,
                    None => prompt_gender()?,
                },
                ..RegisterForm::default()
            };
            register(form, ctx).await
        }
        AccountCommand::Logout { yes } => logout(yes, ctx),
    }
}

fn logout(yes: bool, ctx: &Context) -> Result<()> {
    if !yes
        && !ctx.output.is_json()
        && !Confirm::new()
            .with_prompt("End the session and drop its cart?")
            .default(false)
            .interact()?
    {
        ctx.output.warn("Cancelled");
        return Ok(());
    }

    let id = ctx.end_session()?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "session": id.as_str(), "ended": true }));
    } else {
        ctx.output.success(&format!("Session {id} ended"));
    }
    Ok(())
}

async fn login(username: String, password: Option<String>, ctx: &Context) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let storefront = ctx.storefront()?;
    let spinner = ctx.output.spinner("Logging in...");
    let result = storefront.login().submit(&username, &password).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "username": username, "logged_in": true }));
            } else {
                ctx.output.success(&format!("Logged in as {username}"));
            }
            Ok(())
        }
        Err(alert) => {
            ctx.output.alert(&alert);
            bail!("{}", alert.title)
        }
    }
}

async fn register(mut form: RegisterForm, ctx: &Context) -> Result<()> {
    form.password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    form.password_confirmation = form.password.clone();

    let storefront = ctx.storefront()?;
    let spinner = ctx.output.spinner("Creating account...");
    let result = storefront.register().submit(&form).await;
    spinner.finish_and_clear();

    match result {
        Ok(message) => {
            let message = message.unwrap_or_else(|| "Registration successful".to_string());
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "message": message }));
            } else {
                ctx.output.success(&message);
                ctx.output
                    .info(&format!("Log in with: storefront account login {}", form.username));
            }
            Ok(())
        }
        Err(alert) => {
            ctx.output.alert(&alert);
            bail!("{}", alert.title)
        }
    }
}

fn prompt_missing(prompt: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

fn prompt_gender() -> Result<String> {
    let choice = Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 { "1" } else { "2" }.to_string())
}
