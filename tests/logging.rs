use hoopsim::logging;
use log::LevelFilter;

#[test]
fn logger_installs_once() {
    assert!(logging::try_init(LevelFilter::Info).is_ok());
    assert!(logging::try_init(LevelFilter::Debug).is_err());

    log::info!("still logging after the second install failed");
}
