mod cli;
mod error;

fn main() {
    if let Err(e) = cli::run_from_env() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
