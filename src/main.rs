fn main() {
    if let Err(e) = ascii_chart::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
