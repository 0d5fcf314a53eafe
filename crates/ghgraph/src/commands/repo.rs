//! `repo`, `branch` and `branches` commands

use super::require;
use crate::context::Context;
use crate::output::{or_dash, print_json, print_text};
use anyhow::Result;
use colored::Colorize;

pub fn show(ctx: &Context, owner: &str, name: &str) -> Result<()> {
    let repo = require(
        ctx.client.repository(owner, name)?,
        format!("repository '{owner}/{name}'"),
    )?;

    if ctx.json {
        return print_json(&repo);
    }
    print_text(&format!(
        "{} (id {})\n  description:    {}\n  homepage:       {}\n  default branch: {}\n  archived:       {}\n  owner:          {}",
        repo.full_name().bold(),
        repo.id(),
        or_dash(repo.description()),
        or_dash(repo.homepage()),
        repo.default_branch(),
        repo.is_archived(),
        repo.owner_login(),
    ))?;
    Ok(())
}

pub fn show_branch(ctx: &Context, owner: &str, repo: &str, name: &str) -> Result<()> {
    let branch = require(
        ctx.client.branch(owner, repo, name)?,
        format!("branch '{name}' of '{owner}/{repo}'"),
    )?;

    if ctx.json {
        return print_json(&branch);
    }
    print_text(branch.name())?;
    Ok(())
}

pub fn list_branches(ctx: &Context, owner: &str, repo: &str) -> Result<()> {
    let branches = require(
        ctx.client.branches_of(owner, repo)?,
        format!("branches of '{owner}/{repo}'"),
    )?;

    if ctx.json {
        return print_json(&branches);
    }
    for branch in &branches {
        print_text(branch.name())?;
    }
    Ok(())
}
