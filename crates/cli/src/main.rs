use clap::Parser;
use ferrous_inet_domain::config::ResolverBackend;
use ferrous_inet_domain::CliOverrides;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

mod bootstrap;
mod commands;
mod di;

use commands::{Command, Executor, Outcome, OutputFormat};

#[derive(Parser)]
#[command(name = "ferrous-inet")]
#[command(version)]
#[command(about = "Ferrous Inet - dual-stack address codec, masking, lookups and IDNA labels")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Resolver backend (system, upstream)
    #[arg(long, global = true)]
    backend: Option<ResolverBackend>,

    /// Upstream DNS server, e.g. 9.9.9.9:53
    #[arg(long, global = true)]
    upstream: Option<String>,

    /// Per-call resolver timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Charset assumed for labels given without --charset
    #[arg(long, global = true)]
    default_charset: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print one JSON object per call
    #[arg(long, global = true)]
    json: bool,

    /// Read one input per line from stdin
    #[arg(long, global = true)]
    stdin: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        backend: cli.backend,
        upstream: cli.upstream.clone(),
        timeout_secs: cli.timeout,
        default_charset: cli.default_charset.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let resolver = di::build_resolver(&config)?;
    let use_cases = Arc::new(di::UseCases::new(&config, resolver));
    let executor = Executor::new(
        use_cases,
        Duration::from_secs(config.resolver.timeout_secs),
        config.resolver.max_concurrent,
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let (operation, input) = cli.command.into_parts();

    let outcomes: Vec<Outcome> = if cli.stdin {
        let inputs = read_stdin_lines()?;
        info!(operation = operation.name(), count = inputs.len(), "Running batch");
        executor.run_batch(&operation, inputs).await
    } else {
        let input = input.ok_or_else(|| {
            anyhow::anyhow!("{} needs an input argument (or --stdin)", operation.name())
        })?;
        vec![executor.run(&operation, input).await]
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    for outcome in &outcomes {
        outcome.write(format, cli.stdin, &mut out, &mut err)?;
    }
    out.flush()?;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    debug!(total = outcomes.len(), failed, "Done");

    // Timed-out resolver threads would otherwise keep the runtime from
    // shutting down.
    std::process::exit(if failed == 0 { 0 } else { 1 });
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::Operation;
    use ferrous_inet_domain::AddressFamily;

    #[test]
    fn test_parse_mask_with_negative_bits() {
        let cli =
            Cli::try_parse_from(["ferrous-inet", "mask", "10.0.0.1", "--bits", "-1"]).unwrap();
        let (operation, input) = cli.command.into_parts();

        assert_eq!(operation, Operation::Mask { bits: -1 });
        assert_eq!(input.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ferrous-inet",
            "lookup",
            "--json",
            "--backend",
            "upstream",
            "--binary",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.backend, Some(ResolverBackend::Upstream));
        let (operation, input) = cli.command.into_parts();
        assert_eq!(operation, Operation::Lookup { binary: true });
        assert!(input.is_none());
    }

    #[test]
    fn test_parse_pton_family() {
        let cli =
            Cli::try_parse_from(["ferrous-inet", "pton", "--family", "inet6", "::1"]).unwrap();
        let (operation, _) = cli.command.into_parts();

        assert_eq!(
            operation,
            Operation::Pton {
                family: Some(AddressFamily::V6)
            }
        );
        assert!(Cli::try_parse_from(["ferrous-inet", "pton", "--family", "ipx", "::1"]).is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result =
            Cli::try_parse_from(["ferrous-inet", "--backend", "carrier-pigeon", "pton", "::1"]);
        assert!(result.is_err());
    }
}
