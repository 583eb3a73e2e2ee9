//! Cluster-configuration pipeline: resolve hosts, assemble the certificate
//! blob and render the configuration template.

use std::path::PathBuf;

use serde::Serialize;

use crate::certs;
use crate::error::AppError;
use crate::render;
use crate::resolver::{self, HostEntry, HostLookup};

/// Automation user baked into the generated configuration.
pub const ANSIBLE_USER: &str = "rancher";

/// File name the provisioning tooling expects the configuration under.
pub const RKE_CLUSTER_CONFIG: &str = "rancher-config.yml";

/// Name of the certificate blob written beside the output file.
pub const ROOT_CERTS_FILE: &str = "root-certs.txt";

/// Inputs for one cluster-configuration run.
#[derive(Debug, Clone)]
pub struct ClusterOptions {
    /// Comma-separated hostnames to resolve and place in the cluster.
    pub hosts: String,
    pub cluster_name: String,
    pub rke_k8s_version: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub docker_registry: String,
    /// Directory scanned for `Root_*.cer` files.
    pub certs_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

/// Flat render context handed to the template engine once, never mutated
/// afterward.
#[derive(Debug, Serialize)]
struct ClusterContext {
    rke_cluster_config: &'static str,
    ansible_user: &'static str,
    docker_registry: String,
    cluster_name: String,
    rke_k8s_version: String,
    s3_access_key: String,
    s3_secret_key: String,
    hosts: Vec<HostEntry>,
    root_certs: String,
}

/// What a run produced, for the binary to report.
#[derive(Debug)]
pub struct ClusterOutcome {
    pub output: PathBuf,
    pub host_count: usize,
    pub cert_count: usize,
}

/// Run the whole pipeline and write the rendered configuration to
/// `options.output`, overwriting any previous file.
pub fn generate<L: HostLookup>(
    lookup: &L,
    options: ClusterOptions,
) -> Result<ClusterOutcome, AppError> {
    let hosts = resolver::resolve_hosts(lookup, &options.hosts)?;
    let host_count = hosts.len();

    let files = certs::collect_cert_files(&options.certs_dir)?;
    let cert_count = files.len();
    if files.is_empty() {
        println!(
            "⚠️  No certificate files matching {} under {}; continuing with an empty blob",
            certs::CERT_GLOB,
            options.certs_dir.display()
        );
    }

    let blob_path = match options.output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(ROOT_CERTS_FILE),
        _ => PathBuf::from(ROOT_CERTS_FILE),
    };
    let root_certs = certs::build_cert_blob(&files, &blob_path)?;

    let context = ClusterContext {
        rke_cluster_config: RKE_CLUSTER_CONFIG,
        ansible_user: ANSIBLE_USER,
        docker_registry: options.docker_registry,
        cluster_name: options.cluster_name,
        rke_k8s_version: options.rke_k8s_version,
        s3_access_key: options.s3_access_key,
        s3_secret_key: options.s3_secret_key,
        hosts,
        root_certs,
    };

    render::render_to_file(&options.template, &context, &options.output)?;

    Ok(ClusterOutcome { output: options.output, host_count, cert_count })
}
