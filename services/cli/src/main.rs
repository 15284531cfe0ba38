fn main() {
    if let Err(err) = hirenow_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
