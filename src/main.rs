//! RamadanSync main entrypoint.

use ramadansync::run;
use ramadansync::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
