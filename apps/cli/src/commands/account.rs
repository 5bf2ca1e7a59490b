use anyhow::bail;

use auth_cell::{
    navigation, resolve, AuthService, PasswordChange, ProfileService, ProfileUpdate, RegisterForm,
    RouteDecision,
};
use shared_i18n::Language;

use crate::cli::ProfileCommand;
use crate::context::AppContext;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> anyhow::Result<()> {
    ctx.enter("/login")?;

    let response = AuthService::with_client(ctx.api()).login(email, password).await?;
    let session = ctx.sessions.login(response.user, response.token)?;

    if let Some(user) = &session.user {
        println!("Signed in as {} ({})", user.full_name(), user.role);
    }
    Ok(())
}

pub async fn register(
    ctx: &AppContext,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    repeat_password: String,
) -> anyhow::Result<()> {
    ctx.enter("/register")?;

    let form = RegisterForm {
        first_name,
        last_name,
        email,
        password,
        repeat_password,
    };

    let response = AuthService::with_client(ctx.api()).register(&form).await?;
    let session = ctx.sessions.login(response.user, response.token)?;

    if let Some(user) = &session.user {
        println!("Welcome, {}", user.full_name());
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.sessions.logout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.sessions.current();
    let tr = ctx.translator();

    match &session.user {
        Some(user) => println!("{} <{}> {}", user.full_name(), user.email, user.role),
        None => println!("Not signed in"),
    }

    for link in navigation(&session) {
        println!("  {:<24} {}", tr.t(link.label_key), link.path);
    }
    Ok(())
}

pub fn route(ctx: &AppContext, path: &str) -> anyhow::Result<()> {
    match resolve(&ctx.sessions.current(), path) {
        RouteDecision::Render { view, params } => {
            println!("render {:?}", view);
            let mut params: Vec<_> = params.into_iter().collect();
            params.sort();
            for (key, value) in params {
                println!("  {} = {}", key, value);
            }
        }
        RouteDecision::Redirect(to) => println!("redirect {}", to),
    }
    Ok(())
}

pub fn lang(ctx: &AppContext, code: Option<&str>) -> anyhow::Result<()> {
    let Some(code) = code else {
        let current = ctx.languages.language();
        for language in Language::ALL {
            let marker = if language == current { "*" } else { " " };
            println!("{} {} {}", marker, language.code(), language.native_name());
        }
        return Ok(());
    };

    let Some(language) = Language::ALL
        .into_iter()
        .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    else {
        bail!("Unknown language: {}", code);
    };

    ctx.languages.change_language(language)?;
    println!("{}", language.native_name());
    Ok(())
}

pub async fn profile(ctx: &AppContext, command: ProfileCommand) -> anyhow::Result<()> {
    ctx.enter("/profile")?;
    let service = ProfileService::with_client(ctx.api());
    let token = ctx.token()?;

    match command {
        ProfileCommand::Show => {
            let user = service.get_profile(&token).await?;
            println!("{} <{}>", user.full_name(), user.email);
            println!("role:    {}", user.role);
            if let Some(status) = user.status {
                println!("status:  {}", status);
            }
            println!("country: {}", user.country.as_deref().unwrap_or("-"));
            println!("address: {}", user.address.as_deref().unwrap_or("-"));
            println!("image:   {}", user.image_url.as_deref().unwrap_or("-"));
        }
        ProfileCommand::Update {
            first_name,
            last_name,
            image_url,
            country,
            address,
        } => {
            let current = service.get_profile(&token).await?;
            let mut update = ProfileUpdate::from_user(&current);
            if let Some(v) = first_name {
                update.first_name = v;
            }
            if let Some(v) = last_name {
                update.last_name = v;
            }
            if let Some(v) = image_url {
                update.image_url = v;
            }
            if let Some(v) = country {
                update.country = v;
            }
            if let Some(v) = address {
                update.address = v;
            }

            let user = service.update_profile(&ctx.sessions, &update).await?;
            println!("Profile saved for {}", user.full_name());
        }
        ProfileCommand::Password { old, new, repeat } => {
            let change = PasswordChange {
                old_password: old,
                new_password: new,
                repeat_password: repeat,
            };
            service.change_password(&change, &token).await?;
            println!("Password changed");
        }
    }
    Ok(())
}
