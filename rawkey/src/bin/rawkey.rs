// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use rawkey::{CLIArg, CommonResult, ok, run_app,
             setup_default_miette_global_report_handler};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Printed under every error report.
const REPORT_FOOTER: &str =
    "If your terminal stops echoing what you type, run `reset` and press Enter.";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    let cli_arg = CLIArg::parse();

    // Any error is returned after the terminal has been restored, so miette prints it
    // on a cooked terminal.
    run_app(cli_arg)?;

    ok!()
}
