//! errview binary entry point.

use errview::ui::output;

fn main() {
    if let Err(err) = errview::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
