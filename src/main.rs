use std::process::ExitCode;

use uploadhub::ui::output;

fn main() -> ExitCode {
    match uploadhub::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
