use malbench::{banner, log, Config};

use std::process;

fn main() {
    let config = Config::from_env();

    if let Err(err) = banner::print(&config) {
        log::bad(&format!("failed to print banner: {}", err));
        process::exit(1);
    }
}
