//! Command-line interface for payment request URIs.
//!
//! `eip681 encode` assembles an identifier from recipient, amount, and
//! network options and prints it - or renders it as a QR code in one of
//! several formats. `eip681 decode` parses an existing identifier back into
//! its fields as JSON.
//!
//! Environment:
//! - `RUST_LOG` controls tracing output
//! - `EIP681_NETWORK` preselects a network for `encode`

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use eip681_rs::qr::{self, QrOptions, QrOutput};
use eip681_rs::request::PaymentRequest;
use eip681_rs::{PaymentOptions, networks, uri};

#[derive(Parser)]
#[command(name = "eip681", version, about = "EIP-681 payment request URIs and QR codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a payment request URI and print or render it.
    Encode(EncodeArgs),
    /// Decode a payment request URI into its fields (JSON).
    Decode {
        /// The identifier to decode.
        uri: String,
    },
    /// List known networks and their token deployments.
    Networks,
}

#[derive(Args)]
struct EncodeArgs {
    /// Recipient address.
    #[arg(long)]
    to: String,

    /// Human-unit amount, e.g. "1.5".
    #[arg(long)]
    amount: String,

    /// Network name (ethereum, polygon, avalanche).
    #[arg(long, env = "EIP681_NETWORK")]
    network: Option<String>,

    /// Custom token contract address.
    #[arg(long)]
    token: Option<String>,

    /// Token precision override (requires --token).
    #[arg(long)]
    decimals: Option<u8>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Output::Uri)]
    format: Output,

    /// Minimum image width in pixels for PNG output.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Write the output to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// The bare identifier.
    Uri,
    /// The full request record as JSON.
    Json,
    /// QR code as character art.
    Terminal,
    /// QR code as unicode half-block art.
    Unicode,
    /// QR code as SVG markup.
    Svg,
    /// QR code as PNG bytes.
    Png,
    /// QR code as a base64 data URI.
    DataUri,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Encode(args) => encode(args),
        Command::Decode { uri } => {
            let decoded = uri::decode(&uri)?;
            let mut value = serde_json::to_value(&decoded)?;
            if let Some(network) = networks::network_for_chain(decoded.chain_id) {
                value["network"] = serde_json::Value::String(network.to_string());
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Command::Networks => {
            for deployment in networks::KNOWN_NETWORKS {
                println!(
                    "{}\tchain {}\ttoken {}\tdecimals {}",
                    deployment.network,
                    deployment.chain_id,
                    deployment.token,
                    deployment.decimals
                );
            }
            Ok(())
        }
    }
}

fn encode(args: EncodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = PaymentOptions {
        recipient: args.to,
        amount: args.amount,
        network: args.network,
        token: args.token,
        decimals: args.decimals,
    };
    let request = PaymentRequest::build(&options)?;

    for advisory in &request.advisories {
        eprintln!("warning: {} ({})", advisory, advisory.code());
    }

    let payload = match args.format {
        Output::Uri => QrOutput::Text(request.uri.clone()),
        Output::Json => QrOutput::Text(serde_json::to_string_pretty(&request)?),
        Output::Terminal => qr::render(&request.uri, &QrOptions::terminal())?,
        Output::Unicode => qr::render(&request.uri, &QrOptions::unicode())?,
        Output::Svg => qr::render(&request.uri, &QrOptions::svg())?,
        Output::Png => qr::render(&request.uri, &QrOptions::png(args.width))?,
        Output::DataUri => {
            let mut options = QrOptions::data_uri();
            options.width = args.width;
            qr::render(&request.uri, &options)?
        }
    };

    match (args.out, payload) {
        (Some(path), payload) => {
            fs::write(&path, payload.into_bytes())?;
            eprintln!("wrote {}", path.display());
        }
        (None, QrOutput::Text(text)) => println!("{text}"),
        (None, QrOutput::Bytes(bytes)) => {
            // Raw PNG on stdout is only useful when piped; write it as-is.
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}
