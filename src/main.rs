//! rTimeclock main entrypoint.

use rtimeclock::run;
use rtimeclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
