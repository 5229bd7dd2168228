fn main() {
    if let Err(e) = ctok_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
