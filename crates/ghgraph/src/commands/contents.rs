//! `file`, `ls` and `raw` commands

use super::require;
use crate::context::Context;
use crate::output::{print_bytes, print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use ghgraph_github::File;

pub fn show_file(
    ctx: &Context,
    owner: &str,
    repo: &str,
    path: Option<&str>,
    reference: Option<&str>,
) -> Result<()> {
    let file = require(
        ctx.client.file(owner, repo, reference, path)?,
        describe(owner, repo, path, reference),
    )?;

    if ctx.json {
        return print_json(&file);
    }
    print_text(&format!(
        "{}\n  type:     {}\n  size:     {}\n  sha:      {}\n  download: {}",
        file.path().bold(),
        file.type_name(),
        file.size(),
        file.sha(),
        file.download_url().unwrap_or("-"),
    ))?;
    Ok(())
}

pub fn list_dir(
    ctx: &Context,
    owner: &str,
    repo: &str,
    dir: Option<&str>,
    reference: Option<&str>,
) -> Result<()> {
    let entries = require(
        ctx.client.files_of(owner, repo, reference, dir)?,
        describe(owner, repo, dir, reference),
    )?;

    if ctx.json {
        return print_json(&entries);
    }
    for entry in &entries {
        print_text(&format_entry(entry))?;
    }
    Ok(())
}

pub fn raw(ctx: &Context, owner: &str, repo: &str, branch: &str, path: &str) -> Result<()> {
    let raw = ctx.client.raw_file(owner, repo, branch, path);
    let bytes = require(raw.fetch(&ctx.client)?, format!("raw file {}", raw.url()))?;
    print_bytes(&bytes)?;
    Ok(())
}

fn format_entry(entry: &File) -> String {
    let name = if entry.is_dir() {
        format!("{}/", entry.name()).blue().to_string()
    } else {
        entry.name().to_string()
    };
    format!("{:<9} {:>10}  {}", entry.type_name(), entry.size(), name)
}

fn describe(owner: &str, repo: &str, path: Option<&str>, reference: Option<&str>) -> String {
    let path = path.filter(|p| !p.is_empty()).unwrap_or("/");
    match reference {
        Some(reference) => format!("'{path}' in '{owner}/{repo}' at '{reference}'"),
        None => format!("'{path}' in '{owner}/{repo}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_root_and_ref() {
        assert_eq!(describe("o", "r", None, None), "'/' in 'o/r'");
        assert_eq!(
            describe("o", "r", Some("docs/a.md"), Some("dev")),
            "'docs/a.md' in 'o/r' at 'dev'"
        );
    }
}
