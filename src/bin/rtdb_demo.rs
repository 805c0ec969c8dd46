//! Walks through every operation against a live database.
//!
//! ```text
//! rtdb-demo baseUrl=https://my-project.firebaseio.com/fb4jDemo [apiKey=<web api key>]
//! ```

use anyhow::{bail, Context};
use firebase_rtdb_rest::{FirebaseDatabase, JsonMap};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const SIGN_UP_URL: &str = "https://www.googleapis.com/identitytoolkit/v3/relyingparty";

#[derive(Debug, Default, PartialEq)]
struct DemoArgs {
    base_url: String,
    api_key: Option<String>,
}

/// Parses `name=value` arguments. `baseUrl` is required, `apiKey` optional.
fn parse_args<I>(args: I) -> anyhow::Result<DemoArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut base_url = None;
    let mut api_key = None;

    for arg in args {
        let Some((name, value)) = arg.trim().split_once('=') else {
            continue;
        };
        match name {
            "baseUrl" => base_url = Some(value.trim().to_string()),
            "apiKey" => api_key = Some(value.trim().to_string()),
            _ => {}
        }
    }

    match base_url {
        Some(base_url) if !base_url.is_empty() => Ok(DemoArgs {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }),
        _ => bail!("Program-argument 'baseUrl' not found but required"),
    }
}

fn object(value: serde_json::Value) -> JsonMap {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonMap::new(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let db = FirebaseDatabase::new(&args.base_url).context("invalid baseUrl")?;

    db.root().delete().await?;

    let response = db
        .root()
        .put(object(json!({ "PUT-root": "This was PUT into the fb4jDemo-root" })))
        .await?;
    println!("Result of PUT (for the test-PUT to fb4jDemo-root):\n{}\n", response);

    let response = db.root().get().await?;
    println!("Result of GET:\n{}\n", response);

    let data = object(json!({
        "Key_1": "This is the first value",
        "Key_2": "This is value #2",
        "Key_3": { "Sub-Key1": "This is the first sub-value" }
    }));
    let response = db.put("test-PUT", data.clone()).await?;
    println!("Result of PUT (for the test-PUT):\n{}\n", response);

    let response = db.get("test-PUT").await?;
    println!("Result of GET (for the test-PUT):\n{}\n", response);

    let response = db.post("test-POST", data).await?;
    println!("Result of POST (for the test-POST):\n{}\n", response);

    let doomed = object(json!({ "DELETE": "This should not appear; should have been DELETED" }));
    let response = db.put("test-DELETE", doomed).await?;
    println!("Result of PUT (for the test-DELETE):\n{}\n", response);
    let response = db.delete("test-DELETE").await?;
    println!("Result of DELETE (for the test-DELETE):\n{}\n", response);
    let response = db.get("test-DELETE").await?;
    println!("Result of GET (for the test-DELETE):\n{}\n", response);

    match args.api_key {
        Some(api_key) => {
            let identity = FirebaseDatabase::builder(SIGN_UP_URL)
                .json_suffix(false)
                .build()?;
            let response = identity
                .reference("signupNewUser")
                .query("key", api_key)
                .post(object(json!({
                    "email": "demo-user@example.com",
                    "password": "demo-password",
                    "returnSecureToken": true
                })))
                .await?;
            println!("Result of Signing Up:\n{}\n", response);
        }
        None => println!("Result of Signing Up:\n failed, because no API Key was provided.\n"),
    }

    Ok(())
}
