//! Resolves the endpoints of a DNS service once.
//!
//! Usage: discover [--port <default-port>] <service-name>
//!
//! Set `RUST_LOG=trace` to see what the resolver is doing.

use domain::resolv::StubResolver;
use domain_discovery::{DiscoveryConf, ServiceDnsResolver};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut conf = DiscoveryConf::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--port" {
            match args.next().map(|port| port.parse()) {
                Some(Ok(port)) => conf.default_port = port,
                _ => {
                    eprintln!("--port needs a port number");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            conf.service_dns = arg;
        }
    }
    if conf.service_dns.is_empty() {
        eprintln!("Usage: discover [--port <default-port>] <service-name>");
        return ExitCode::FAILURE;
    }

    let resolver = ServiceDnsResolver::from_conf(conf, StubResolver::new());
    match resolver.resolve_blocking() {
        Ok(found) if found.is_empty() => {
            println!("No endpoints for {}", resolver.service());
            ExitCode::SUCCESS
        }
        Ok(found) => {
            for endpoint in found {
                println!("{}", endpoint);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
