//! # namesilo-provider
//!
//! DNS record management for zones registered at [NameSilo](https://www.namesilo.com/),
//! exposed through a generic list / append / set / delete record contract.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use namesilo_provider::{create_provider, DnsRecordProvider, ProviderConfig, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(&ProviderConfig::new("your-api-key"))?;
//!
//!     // Upsert an ACME challenge record: updates `_acme-challenge` if it exists,
//!     // creates it otherwise.
//!     let challenge = Record::new("TXT", "_acme-challenge.example.com", "token").with_ttl(3600);
//!     provider.set_records("example.com", &[challenge.clone()]).await?;
//!
//!     for record in provider.get_records("example.com").await? {
//!         println!("{} {} {} ({})", record.name, record.record_type, record.value, record.id);
//!     }
//!
//!     // Remove it again; unmatched records are skipped.
//!     provider.delete_records("example.com", &[challenge]).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Matching
//!
//! `set_records` and `delete_records` match records without an ID against the
//! zone's current records by type and zone-relative hostname
//! (`_acme.example.com` and `_acme` are the same host in zone `example.com`).
//! Each existing record is matched at most once per call.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Calls are
//! issued one at a time and the first failure aborts the operation; records
//! processed before it stay applied at the registrar. Re-list to learn the
//! actual state.

mod error;
mod factory;
mod http_client;
mod matching;
mod providers;
mod reconciler;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{ProviderConfig, create_provider};

// Re-export public traits (internal traits are not exported)
pub use traits::{DnsRecordProvider, RegistrarClient};

// Re-export types
pub use types::{CreateRecordRequest, DeleteRecordRequest, RawResponse, Record, UpdateRecordRequest};

// Re-export matching and name helpers
pub use matching::{RecordPool, SetPlan, plan_delete, plan_set};
pub use providers::common::{relative_host, zone_domain};

// Re-export the reconciler and the NameSilo transport
pub use providers::{NamesiloClient, NamesiloClientBuilder};
pub use reconciler::{NamesiloProvider, RecordReconciler};
