use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use crate::explorer::RenderOptions;
use crate::explorer::consts::DEFAULT_ITEMS_TO_SHOW;
use crate::schemas::Network;

static CONFIG: OnceLock<CliArgs> = OnceLock::new();

pub fn parse_network(s: &str) -> std::result::Result<Network, String> {
    match s.to_ascii_lowercase().as_str() {
        "mainnet" => Ok(Network::Mainnet),
        "testnet" => Ok(Network::Testnet),
        "devnet" => Ok(Network::Devnet),
        "local" | "localnet" => Ok(Network::Local),
        _ => Err(
            "invalid value for --network: expected 'mainnet', 'testnet', 'devnet' or 'local'"
                .into(),
        ),
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Transaction summary JSON (balance changes + object changes)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the rendered page; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Network whose links the page should carry: mainnet, testnet, devnet or local
    #[arg(short, long, value_parser = parse_network, default_value = "mainnet")]
    pub network: Network,

    /// Render every object list expanded
    #[arg(long, default_value_t = false)]
    pub expand_all: bool,

    /// Objects shown per list before "Show All"
    #[arg(long, default_value_t = DEFAULT_ITEMS_TO_SHOW)]
    pub items_to_show: usize,
}

impl CliArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            network: self.network,
            items_to_show: self.items_to_show,
            expand_all: self.expand_all,
        }
    }
}

pub fn validate(args: &CliArgs) -> Result<()> {
    let input = Path::new(&args.input);
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input path is not a file: {}", input.display());
    }
    if let Some(parent) = args.output.as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            anyhow::bail!("Output directory does not exist: {}", parent.display());
        }
    }
    Ok(())
}

pub fn init_config() -> Result<()> {
    let args = CliArgs::parse();
    validate(&args)?;

    CONFIG
        .set(args)
        .map_err(|_| anyhow::anyhow!("config already initialized"))?;
    Ok(())
}

pub fn get_config() -> &'static CliArgs {
    CONFIG.get().expect("init_config() must be called once at startup")
}
