//! Environment overrides live in their own test binary: `set_var` must not
//! race with the `env::vars()` scan done by every `load_config`.

use pirateconfig::{Config, ENV_PREFIX};
use serde_yaml::Value;

#[test]
fn test_env_override() {
    let flag = format!("{}INTEGRATION__ENV_ONLY_FLAG", ENV_PREFIX);
    let port = format!("{}HOST__HTTP_PORT", ENV_PREFIX);
    // SAFETY: single test in this binary, no other thread touches the environment.
    unsafe {
        std::env::set_var(&flag, "true");
        std::env::set_var(&port, "9400");
    }

    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
    assert_eq!(
        config.get_value(&["integration", "env_only_flag"]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(config.get_http_port(), 9400);

    unsafe {
        std::env::remove_var(&flag);
        std::env::remove_var(&port);
    }
}
