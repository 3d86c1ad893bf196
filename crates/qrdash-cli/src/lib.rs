use std::path::Path;

/// Name used for the uploaded object's extension: the file name of `path`,
/// or the whole path when it has none.
pub fn original_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Initialize tracing for CLI binaries.
///
/// Logs go to stderr so stdout carries only the JSON result.
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_name_uses_file_name() {
        assert_eq!(original_name(Path::new("/tmp/qr/avatar.png")), "avatar.png");
        assert_eq!(original_name(Path::new("logo.svg")), "logo.svg");
    }

    #[test]
    fn original_name_without_file_name_falls_back_to_path() {
        assert_eq!(original_name(Path::new("/")), "/");
    }
}
