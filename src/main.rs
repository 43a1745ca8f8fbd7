use std::io;
use std::process::ExitCode;

use log::error;

use u_tsp_brute::memory::{CountingAlloc, INSTRUMENTED_SYSTEM};
use u_tsp_brute::{logging, App, RunConfig};

#[global_allocator]
static GLOBAL: &CountingAlloc = &INSTRUMENTED_SYSTEM;

fn main() -> ExitCode {
    let config = RunConfig::default();
    if let Err(e) = logging::init_logger(&config) {
        eprintln!("{e}");
    }

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match app.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
