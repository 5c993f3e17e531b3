//! KEGG MCP Server
//!
//! Looks up which drugs act on a KEGG pathway and what each drug is: name,
//! class and molecular targets. Exposed as Model Context Protocol tools for
//! LLM agents and as a CSV batch processor.
//!
//! # Features
//!
//! - **3 MCP Tools**: pathway drug list, drug record, pathway drug table
//! - **Polite to KEGG**: fixed delay after every request, 429 backoff with jitter
//! - **Cached**: LRU memoization of pathway and drug lookups
//!
//! # Example
//!
//! ```no_run
//! use kegg_mcp::{KeggApi, KeggClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KeggClient::new(Config::from_env()?)?;
//!
//!     for drug_id in client.list_pathway_drugs("path:hsa04012").await? {
//!         let record = client.get_drug_info(&drug_id).await?;
//!         println!("{} {}", record.drug_id, record.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod flatfile;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use cache::CachedKegg;
pub use client::{KeggApi, KeggClient};
pub use config::Config;
pub use error::{BatchError, ClientError, ToolError};
pub use models::DrugRecord;
