use std::io::{stderr, stdout};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use command_forwarder_cli::cli_args::Args;
use command_forwarder_cli::forwarding::forward;
use command_forwarder_cli::presenter::Presenter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let presenter = Presenter::new(!args.no_color);

    match forward(&args, &presenter, &mut stdout().lock(), &mut stderr()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            // Nothing more can be reported if stderr itself is broken.
            let _ = presenter.write_error(&mut stderr(), &e.to_string());
            ExitCode::FAILURE
        }
    }
}
