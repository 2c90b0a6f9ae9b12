use sigprov_log::{current_config, init_from_env, set_stderr_enabled, LogConfig};

#[test]
fn init_from_env_installs_env_config() {
    set_stderr_enabled(false);
    init_from_env();
    assert_eq!(current_config(), LogConfig::from_env());
}
