//! Read-only listing of adapters and monitors via the legacy enumeration
//! backend. Takes no arguments.

fn main() {
    tracing_subscriber::fmt::init();

    let adapters = match display_detach_win::enumerate_adapters() {
        Ok(adapters) => adapters,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(-1);
        }
    };

    for adapter in &adapters {
        if adapter.monitors.is_empty() {
            continue;
        }
        println!("Display adapter: {} ({})", adapter.description, adapter.name);
        for monitor in &adapter.monitors {
            println!("- monitor: {} ({})", monitor.description, monitor.name);
            if monitor.attached {
                println!("   - attached!");
            } else {
                println!("   - detached!");
            }
            if monitor.primary {
                println!("   - primary!");
            }
            match monitor.mode {
                Some(mode) => println!("   - current mode: {mode}"),
                None => println!("   - current mode unavailable!"),
            }
        }
    }
}
