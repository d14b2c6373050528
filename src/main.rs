use std::io::{self, Read, Write};
use std::process::ExitCode;

use u_cpusched::config::SimConfig;
use u_cpusched::{input, runner, trace};

fn main() -> ExitCode {
    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        eprintln!("error: failed to read input: {e}");
        return ExitCode::FAILURE;
    }

    let reports = input::parse(&text)
        .and_then(|raw| raw.into_task_set())
        .and_then(|(tasks, quantum)| runner::run_all(&tasks, &SimConfig::with_quantum(quantum)));

    let reports = match reports {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = trace::write_reports(&mut out, &reports).and_then(|_| out.flush()) {
        eprintln!("error: failed to write report: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
