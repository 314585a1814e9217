// src/main.rs
//
// zexp-fa — point d’entrée (tabulation de F_A(q²))
// ------------------------------------------------
// - journal sur stderr (RUST_LOG), table sur stdout
// - code de sortie non nul si la configuration échoue

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod app;

use app::Options;

fn main() -> ExitCode {
    if let Err(err) = zexp_axial_ff::traces::init_tracing() {
        eprintln!("zexp-fa: {err}");
    }

    let opts = Options::parse();
    match app::executer(&opts) {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
