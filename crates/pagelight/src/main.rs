use std::io;
use std::process;

fn main() {
    let code = pagelight::cli::run(
        std::env::args_os(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    process::exit(code);
}
