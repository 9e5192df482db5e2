use std::process::ExitCode;

use segview::{app, logging};

fn main() -> ExitCode {
    logging::init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    ExitCode::from(app::main_with(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    ))
}
