//! JSON bodies shaped like the remote API responses

use serde_json::{Value, json};

pub fn user_json(login: &str, id: u64) -> Value {
    json!({
        "login": login,
        "id": id,
        "name": format!("{login} display"),
        "location": "Earth",
        "avatar_url": format!("https://avatars.example.com/u/{id}"),
        "bio": null,
        "public_repos": 2,
        "public_gists": 1,
        "type": "User"
    })
}

pub fn repository_json(owner: &str, name: &str, id: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "description": format!("The {name} repository"),
        "homepage": null,
        "default_branch": "main",
        "archived": false,
        "private": false,
        "owner": user_json(owner, 1)
    })
}

pub fn branch_json(name: &str) -> Value {
    json!({
        "name": name,
        "commit": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
        "protected": false
    })
}

pub fn file_json(path: &str, size: u64) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "type": "file",
        "name": name,
        "path": path,
        "sha": format!("sha-{}", path.replace('/', "-")),
        "size": size,
        "download_url": format!("https://raw.example.com/{path}"),
        "encoding": "base64",
        "content": ""
    })
}

pub fn dir_json(path: &str) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "type": "dir",
        "name": name,
        "path": path,
        "sha": format!("sha-{}", path.replace('/', "-")),
        "size": 0,
        "download_url": null
    })
}
