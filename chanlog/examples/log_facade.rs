use chanlog::registry_config;

mod network {
    pub fn connect() {
        log::info!("connecting");
        log::debug!("handshake done");
    }
}

fn main() {
    let mut registry = registry_config().build();
    registry
        .register_loggers(["log_facade::network", "log_facade"])
        .unwrap();
    registry.set_level(3);
    registry.set_logger_level(0, 4).unwrap();
    registry.install().expect("no other logger installed");

    log::info!("starting");
    log::debug!("not shown, the main logger stops at INFO");
    network::connect();
    log::logger().flush();
}
