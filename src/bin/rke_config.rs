use std::path::PathBuf;

use clap::Parser;
use opsgen::{ClusterOptions, generate_cluster_config};

#[derive(Parser)]
#[command(name = "rke-config")]
#[command(version)]
#[command(about = "Render an RKE cluster configuration file from a template", long_about = None)]
struct Cli {
    /// Host names to place in the cluster, separated by comma
    #[arg(long)]
    hosts: String,
    /// Cluster domain name to be created
    #[arg(long = "cluster_name")]
    cluster_name: String,
    /// Version of RKE Kubernetes
    #[arg(long = "rke_k8s_version")]
    rke_k8s_version: String,
    /// Access key for S3
    #[arg(long = "s3_access_key")]
    s3_access_key: String,
    /// Secret key for S3
    #[arg(long = "s3_secret_key")]
    s3_secret_key: String,
    /// Docker registry
    #[arg(long = "docker_registry")]
    docker_registry: String,
    /// Directory holding the internal root certificate files
    #[arg(long, default_value = "etc/certs")]
    certs_dir: PathBuf,
    /// Cluster configuration template
    #[arg(long, default_value = "etc/rancher-config.yml.j2")]
    template: PathBuf,
    /// Where to write the rendered configuration
    #[arg(long, default_value = "rancher-config.yml")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options = ClusterOptions {
        hosts: cli.hosts,
        cluster_name: cli.cluster_name,
        rke_k8s_version: cli.rke_k8s_version,
        s3_access_key: cli.s3_access_key,
        s3_secret_key: cli.s3_secret_key,
        docker_registry: cli.docker_registry,
        certs_dir: cli.certs_dir,
        template: cli.template,
        output: cli.output,
    };

    match generate_cluster_config(options) {
        Ok(outcome) => {
            println!(
                "✅ Wrote {} ({} hosts, {} certificates)",
                outcome.output.display(),
                outcome.host_count,
                outcome.cert_count
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
