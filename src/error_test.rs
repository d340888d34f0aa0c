use super::*;

#[test]
fn config_errors_keep_their_message() {
    let err = StartupError::from(ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert!(matches!(err, StartupError::Config(_)));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn bind_error_names_the_address() {
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    let err = StartupError::Bind { addr, source: std::io::Error::from(std::io::ErrorKind::AddrInUse) };
    assert!(err.to_string().starts_with("failed to bind 127.0.0.1:3000: "));
}

#[test]
fn serve_errors_convert_from_io() {
    let err: StartupError = std::io::Error::other("socket closed").into();
    assert_eq!(err.to_string(), "server failed: socket closed");
}
