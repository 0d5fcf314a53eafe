mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use context::Context;

/// Exit status when the remote does not serve the requested resource
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Context::new(cli.config.as_deref(), cli.json).and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        if let Some(not_found) = e.downcast_ref::<commands::NotFound>() {
            eprintln!("{} {}", "Not found:".yellow(), not_found);
            std::process::exit(EXIT_NOT_FOUND);
        }
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(ctx: &Context, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::User { login } => commands::user::show(ctx, &login),
        Commands::Repos { owner } => commands::user::list_repositories(ctx, &owner),
        Commands::Repo { owner, name } => commands::repo::show(ctx, &owner, &name),
        Commands::Branch { owner, repo, name } => {
            commands::repo::show_branch(ctx, &owner, &repo, &name)
        }
        Commands::Branches { owner, repo } => commands::repo::list_branches(ctx, &owner, &repo),
        Commands::File {
            owner,
            repo,
            path,
            reference,
        } => commands::contents::show_file(
            ctx,
            &owner,
            &repo,
            path.as_deref(),
            reference.as_deref(),
        ),
        Commands::Ls {
            owner,
            repo,
            dir,
            reference,
        } => commands::contents::list_dir(ctx, &owner, &repo, dir.as_deref(), reference.as_deref()),
        Commands::Raw {
            owner,
            repo,
            branch,
            path,
        } => commands::contents::raw(ctx, &owner, &repo, &branch, &path),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,ghgraph=debug,ghgraph_github=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
