use lightfs::{FsConfig, Session};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = FsConfig::default();
    let mut session = Session::new(&config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Only a broken console ends the session early
    match session.run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
