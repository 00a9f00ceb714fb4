//! Command-line arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use redfish_api::AuthPolicy;

#[derive(Debug, Parser)]
#[command(name = "redfishd")]
#[command(version, about = "Redfish mock server")]
pub struct Cli {
    /// Port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host or address to bind [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Which routes require basic authentication
    #[arg(long, value_enum)]
    pub auth_policy: Option<PolicyArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Service root and manager collection are public
    DiscoveryExempt,
    /// Every route requires credentials
    RequireAll,
}

impl From<PolicyArg> for AuthPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::DiscoveryExempt => AuthPolicy::DiscoveryExempt,
            PolicyArg::RequireAll => AuthPolicy::RequireAll,
        }
    }
}

/// Single-dash long flags accepted for compatibility with `-port 8080` style
/// invocations.
const SINGLE_DASH_FLAGS: [&str; 3] = ["port", "host", "config"];

/// Rewrite `-port`/`-host`/`-config` (and their `=value` forms) to the
/// double-dash spelling clap expects. Everything else passes through.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}
