//! Binary entrypoint for tsbuild-cli.

fn main() {
    if let Err(err) = tsbuild_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
