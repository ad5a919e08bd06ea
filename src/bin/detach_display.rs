//! One-shot tool: report the current display topology, mark the first
//! actively driven path for detachment, apply the result. Takes no
//! arguments.

fn main() {
    tracing_subscriber::fmt::init();

    let stdout = std::io::stdout();
    if let Err(e) = display_detach_win::detach_first_active(stdout.lock()) {
        println!("Error: {e}");
        std::process::exit(-1);
    }
}
