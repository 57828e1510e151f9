use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simui", about = "emulator front-end support tools")]
pub struct Args {
    /// toml config, defaults to simui.toml under the installation root
    #[arg(long)]
    pub config : Option<PathBuf>,
    #[arg(long)]
    pub log_level : Option<String>,
    #[arg(long)]
    pub log_file : Option<String>,

    #[command(subcommand)]
    pub command : Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// run a lua script's main(root, sim, rom)
    Lua {
        #[arg(long)]
        script : String,
        #[arg(long)]
        sim : String,
        #[arg(long)]
        rom : String,
    },
    Rombase {
        #[command(subcommand)]
        action : RombaseAction,
    },
    File {
        #[command(subcommand)]
        action : FileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RombaseAction {
    List {
        #[arg(long = "type")]
        rom_type : Option<String>,
    },
    /// load [[rombase]] entries from a toml file
    Import {
        file : PathBuf,
    },
    Delete {
        #[arg(long = "type")]
        rom_type : String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FileAction {
    Copy { src : String, dst : String },
    Move { src : String, dst : String },
    Rename { path : String, name : String },
    Delete { path : String },
    Size { path : String },
}

pub fn parsing() -> Args {
    Args::parse()
}
