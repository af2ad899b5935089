// Prevents additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use clap::Parser;
use url::Url;

/// Tidechat - desktop client shell
#[derive(Parser, Debug)]
#[command(name = "tidechat")]
#[command(about = "Tidechat desktop client", long_about = None)]
struct Args {
    /// Load the client from this server instead of the default endpoint
    #[arg(long = "force-server", value_name = "URL")]
    force_server: Option<Url>,
}

fn main() {
    let args = Args::parse();
    tidechat_lib::run(args.force_server);
}
