use branch::ui::output;

fn main() {
    if let Err(e) = branch::cli::run() {
        output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
