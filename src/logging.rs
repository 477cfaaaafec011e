use env_logger::WriteStyle;
use log::LevelFilter;
use std::io::Write;

/// Installs a global logger that prints this crate's messages as `[HOOP | LEVEL] message`.
///
/// Fails if another logger was already installed.
pub fn try_init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[HOOP | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Auto)
        .filter(Some(env!("CARGO_CRATE_NAME")), level)
        .try_init()
}

/// Captured, debug-level logger for tests. Safe to call from every test.
pub fn init_for_test() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .try_init();
}
