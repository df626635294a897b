//! Example usage of the Sylect builder with request-driven field selection

use serde_json::{Value, json};
use sylect::{Field, ProjectError, Schema, Sylect};

fn user_schema() -> Schema {
    let group = Schema::new()
        .field(Field::new("name"))
        .field(Field::new("role"));

    Schema::new()
        .field(Field::new("id").read_only())
        .field(Field::new("username"))
        .field(Field::new("email"))
        .field(Field::new("password").write_only())
        .field(Field::computed("group_count", |user| {
            user.get("groups")
                .and_then(Value::as_array)
                .map(|groups| json!(groups.len()))
                .ok_or_else(|| ProjectError::extract("group_count", "groups missing"))
        }))
        .field(Field::nested_many("groups", group))
}

fn sample_user() -> Value {
    json!({
        "id": 42,
        "username": "ada",
        "email": "ada@example.com",
        "password": "hunter2",
        "groups": [
            {"name": "admins", "role": "owner"},
            {"name": "ops", "role": "member"},
        ],
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize env_logger for sylect's native debug logging
    unsafe {
        std::env::set_var("RUST_LOG", "sylect=debug,sylect_engine=debug");
    }
    env_logger::init();
    println!("✨ Enabled sylect's native projection debug logging\n");

    let user = sample_user();

    // Full projection - write-only fields stay out of the data
    println!("🧪 Full projection (no selection)...");
    let full = Sylect::schema(user_schema())
        .debug()
        .project_value(&user)?;
    println!("📥 {}\n", serde_json::to_string_pretty(&full)?);

    // Explicit select spec with nested paths
    println!("🧪 Explicit select: username,groups.name ...");
    let narrowed = Sylect::schema(user_schema())
        .select(["username", "groups.name"])
        .project_value(&user)?;
    println!("📥 {}\n", serde_json::to_string_pretty(&narrowed)?);

    // Query parameters supersede explicit specs - exactly what a request
    // handler wants when the client controls the field list
    println!("🧪 Query string supersedes the builder's select spec...");
    let from_request = Sylect::schema(user_schema())
        .debug()
        .select("id")
        .query_str("select=username,group_count&exclude=email")
        .project_value(&user)?;
    println!("📥 {}\n", serde_json::to_string_pretty(&from_request)?);

    // Field metadata covers every visited field, write-only included
    println!("🧪 Field metadata for the full projection...");
    let projection = Sylect::schema(user_schema()).project(&user)?;
    for meta in projection.fields() {
        println!(
            "   {} -> key={} read_only={} write_only={} value={}",
            meta.name, meta.key, meta.read_only, meta.write_only, meta.value
        );
    }
    println!();

    // Extraction failures surface as errors, not partial output
    println!("🧪 Computed field failure...");
    let groupless = json!({"username": "grace", "email": "grace@example.com"});
    match Sylect::schema(user_schema()).project_value(&groupless) {
        Ok(_) => println!("📥 unexpected success"),
        Err(error) => println!("❌ {error}"),
    }

    println!("\n✅ Selective projection example completed!");
    Ok(())
}
