use nanolog::{LogLevel, NanoLogger, global};

fn main() {
    let dir = std::env::temp_dir().join("nanolog_example_basic");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    // Process-wide logger: init once, log from anywhere, close at shutdown.
    global::init(dir.join("app.log")).unwrap();
    global::info("application starting").unwrap();
    global::debug("loading configuration").unwrap();
    global::success("configuration loaded").unwrap();

    // Instance logger with its own target, usable alongside the global one.
    let worker_log = NanoLogger::new(dir.join("worker.log")).unwrap();
    worker_log.info("worker spawned").unwrap();
    worker_log.log("checkpoint reached", LogLevel::None).unwrap();

    if let Err(failure) = std::fs::read_to_string(dir.join("does-not-exist")) {
        global::stacktrace(&failure).unwrap();
    }

    global::error("shutting down after simulated failure").unwrap();
    global::close().unwrap();

    for file in ["app.log", "worker.log"] {
        println!("--- {file} ---");
        print!("{}", std::fs::read_to_string(dir.join(file)).unwrap());
    }
}
