use std::process::ExitCode;

fn main() -> ExitCode {
    match fema_denials::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err}");
            if let Some(hint) = err.hint() {
                println!("\n{hint}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
