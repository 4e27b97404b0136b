//! sleepy main entrypoint.

use sleepy::run;
use sleepy::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
