//! Walks from a user down to file content
//!
//! Run with: cargo run -p ghgraph-github --example navigate -- octocat Hello-World
//!
//! Set GITHUB_TOKEN to raise the anonymous rate limit.

use ghgraph_core::GithubConfig;
use ghgraph_github::{Lookup, ResourceClient};

fn main() -> ghgraph_github::Result<()> {
    let mut args = std::env::args().skip(1);
    let login = args.next().unwrap_or_else(|| "octocat".to_string());
    let repo_name = args.next().unwrap_or_else(|| "Hello-World".to_string());

    let client = ResourceClient::from_config(&GithubConfig::default())?;

    println!("Step 1: user {login}");
    let user = match client.user(&login)? {
        Lookup::Found(user) => user,
        Lookup::NotFound { status } => {
            println!("✗ user not found (HTTP {status})");
            return Ok(());
        }
    };
    println!(
        "✓ {} ({}), {} public repos",
        user.login(),
        user.display_name().unwrap_or("-"),
        user.repos_size().unwrap_or(0)
    );

    println!("\nStep 2: repository {repo_name}");
    let Some(repo) = user.repository(&client, &repo_name)?.found() else {
        println!("✗ repository not found");
        return Ok(());
    };
    println!("✓ {} on branch {}", repo.full_name(), repo.default_branch());

    println!("\nStep 3: root listing");
    let Some(branch) = repo.branch(&client, repo.default_branch())?.found() else {
        println!("✗ default branch not found");
        return Ok(());
    };
    let entries = branch.files(&client, "")?.found().unwrap_or_default();
    for entry in &entries {
        println!("  {:<9} {:>8}  {}", entry.type_name(), entry.size(), entry.path());
    }

    if let Some(first) = entries.iter().find(|e| e.is_file()) {
        println!("\nStep 4: raw content of {}", first.path());
        let raw = branch.raw_file(&client, first.path());
        match raw.fetch(&client)? {
            Lookup::Found(bytes) => println!("✓ {} bytes from {}", bytes.len(), raw.url()),
            Lookup::NotFound { status } => println!("✗ HTTP {status} from {}", raw.url()),
        }
    }

    Ok(())
}
