pub mod config;
pub mod error;
pub mod guidance;
pub mod recipes;
pub mod render;
pub mod schemas;
pub mod server;
pub mod tools;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
