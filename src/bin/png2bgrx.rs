use clap::Parser;
use png2bgrx::cli::{Args, logger, run};

fn main() {
    logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("png2bgrx: {e}");
        std::process::exit(1);
    }
}
