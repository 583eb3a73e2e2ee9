//! opsgen: render cluster configuration files and static status pages from
//! templates populated with resolved hosts, certificate blobs and CSV data.

pub mod certs;
pub mod cluster;
pub mod error;
pub mod homepage;
pub mod render;
pub mod resolver;

pub use cluster::{ClusterOptions, ClusterOutcome};
pub use error::AppError;
pub use homepage::{HomepageOptions, HomepageOutcome};

use resolver::SystemLookup;

/// Generate a cluster configuration file using the system resolver.
pub fn generate_cluster_config(options: ClusterOptions) -> Result<ClusterOutcome, AppError> {
    cluster::generate(&SystemLookup, options)
}

/// Generate the homepage and events pages from a CSV record file.
pub fn generate_homepage(options: HomepageOptions) -> Result<HomepageOutcome, AppError> {
    homepage::generate(options)
}
