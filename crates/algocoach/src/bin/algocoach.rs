fn main() {
    if let Err(err) = algocoach::run() {
        eprintln!("{}", algocoach::format_error(&err));
        std::process::exit(1);
    }
}
