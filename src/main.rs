//! racegen main entrypoint.

use racegen::run;
use racegen::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
