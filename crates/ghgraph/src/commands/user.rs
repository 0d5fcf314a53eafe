//! `user` and `repos` commands

use super::require;
use crate::context::Context;
use crate::output::{or_dash, print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use ghgraph_github::{Repository, User};

pub fn show(ctx: &Context, login: &str) -> Result<()> {
    let user = require(ctx.client.user(login)?, format!("user '{login}'"))?;

    if ctx.json {
        return print_json(&user);
    }
    print_text(&format_user(&user))?;
    Ok(())
}

pub fn list_repositories(ctx: &Context, owner: &str) -> Result<()> {
    let repos = require(
        ctx.client.repositories_of(owner)?,
        format!("repositories of '{owner}'"),
    )?;

    if ctx.json {
        return print_json(&repos);
    }
    for repo in &repos {
        print_text(&format_repository_line(repo))?;
    }
    Ok(())
}

fn format_user(user: &User) -> String {
    let counts = |n: Option<u32>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
    format!(
        "{} (id {})\n  name:     {}\n  location: {}\n  bio:      {}\n  avatar:   {}\n  repos:    {}\n  gists:    {}",
        user.login().bold(),
        user.id(),
        or_dash(user.display_name()),
        or_dash(user.location()),
        or_dash(user.bio()),
        or_dash(user.avatar_url()),
        counts(user.repos_size()),
        counts(user.gists_size()),
    )
}

fn format_repository_line(repo: &Repository) -> String {
    let archived = if repo.is_archived() {
        format!(" {}", "[archived]".yellow())
    } else {
        String::new()
    };
    format!(
        "{}{}  {}",
        repo.full_name(),
        archived,
        or_dash(repo.description())
    )
}
