//! tixdesk main entrypoint.

use tixdesk::run;
use tixdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
