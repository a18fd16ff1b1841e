use std::io;

fn main() {
    hog_cli::logging::init_logging();
    let code = hog_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
