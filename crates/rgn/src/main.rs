// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use rgn::{
    report_info_stdio, report_media_file_stdio, report_overlay_dir_stdio, report_packages_stdio,
    report_supported_stdio, InspectOptions,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Spec file listing the carrier packages (defaults to /persist/speccfg/spec).
    #[arg(long, global = true, env = "RGN_SPEC_FILE")]
    spec_file: Option<PathBuf>,

    /// Resolve device paths under this directory, e.g. an extracted system image.
    #[arg(long, global = true, env = "RGN_ROOT")]
    root: Option<PathBuf>,

    /// Display verbose output (defaults to warnings).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reports whether the build supports regional carrier packages.
    Supported,
    /// Lists the carrier packages declared by the spec file.
    Packages,
    /// Reports the boot or shutdown media file provided by the carrier packages.
    Media {
        /// 0 for the animation, 1 for the audio.
        #[arg(value_name = "TYPE", allow_negative_numbers = true)]
        media_type: i32,

        /// 0 for boot, 1 for shutdown.
        #[arg(value_name = "STATE", allow_negative_numbers = true)]
        state: i32,
    },
    /// Reports the resource overlay directory provided by the carrier packages.
    Overlay,
    /// Reports everything resolved from the spec file.
    Info {
        /// Print the details as JSON.
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = InspectOptions {
        spec_file: cli.spec_file,
        root: cli.root,
        verbose: cli.verbose,
    };

    let found = match cli.command.unwrap_or(Commands::Info { json: false }) {
        Commands::Supported => report_supported_stdio(options),
        Commands::Packages => report_packages_stdio(options),
        Commands::Media { media_type, state } => {
            report_media_file_stdio(options, media_type, state)
        }
        Commands::Overlay => report_overlay_dir_stdio(options),
        Commands::Info { json } => report_info_stdio(options, json),
    };

    if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
