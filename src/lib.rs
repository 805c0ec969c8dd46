//! Client for the Firebase Realtime Database REST API.
//!
//! ```rust,no_run
//! use firebase_rtdb_rest::FirebaseDatabase;
//!
//! # async fn run() -> Result<(), firebase_rtdb_rest::DatabaseError> {
//! let db = FirebaseDatabase::new("https://my-project.firebaseio.com/app")?;
//! let response = db.get("users/alan").await?;
//! if response.success {
//!     println!("{:?}", response.body);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod database;
pub mod json;

pub use database::config::{DatabaseConfig, DatabaseConfigBuilder};
pub use database::models::{Body, FirebaseResponse, QueryParams};
pub use database::reference::DatabaseReference;
pub use database::{DatabaseError, FirebaseDatabase};
pub use json::{CodecError, JsonMap};
