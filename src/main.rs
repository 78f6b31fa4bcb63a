use dprint_cli_core::types::ErrBox;
use translation_paths::arg_parser::parse_args;
use translation_paths::environment::{Environment, RealEnvironment};
use translation_paths::run;

#[tokio::main]
async fn main() {
    let args = std::env::args().collect();
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => exit_with_error(&RealEnvironment::new(false), err),
    };

    let environment = RealEnvironment::new(args.is_verbose);
    if let Err(err) = run(&environment, args).await {
        exit_with_error(&environment, err);
    }
}

fn exit_with_error(environment: &RealEnvironment, err: ErrBox) -> ! {
    environment.log_error(&err.to_string());
    std::process::exit(1)
}
