use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, ClapArgs)]
struct Listen {
    /// The address on which the server will listen for incoming connections.
    /// Example: `127.0.0.1`
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    /// The port number on which the server will listen for incoming connections.
    /// Example: `8080`
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the current server time at `/api/time/current`.
    Time {
        #[command(flatten)]
        listen: Listen,
    },

    /// Serve the instance hostname, ip and identity under `/api/whoami`.
    Whoami {
        #[command(flatten)]
        listen: Listen,

        /// Name reported in the instance id when the platform descriptor
        /// (`VCAP_APPLICATION`) does not carry one.
        #[arg(long, env = "APPLICATION_NAME", default_value = "whoami")]
        application_name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Args::parse().cmd {
        Command::Time {
            listen: Listen { host, port },
        } => time_service::serve(time_service::ServerOpts { host, port })
            .await
            .context("time service")?,
        Command::Whoami {
            listen: Listen { host, port },
            application_name,
        } => whoami_service::serve(whoami_service::ServerOpts {
            host,
            port,
            application_name,
        })
        .await
        .context("whoami service")?,
    }

    Ok(())
}
