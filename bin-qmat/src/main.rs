mod app;

use std::process::ExitCode;
use app::App;

fn main() -> ExitCode {
    let app = App::new();

    match app.run() { 
        Ok(output) => { 
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => { 
            log::error!("{e}");
            eprintln!("{}", app.report(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
