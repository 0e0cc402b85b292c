use std::path::Path;

use memorial_gallery::{Options, Viewer};

/// Split CLI arguments into an optional options file (first `.toml`
/// argument) and photo paths (everything else, in order).
fn parse_args(
    args: impl Iterator<Item = String>,
) -> (Option<String>, Vec<String>) {
    let mut options_path = None;
    let mut photos = Vec::new();
    for arg in args {
        if options_path.is_none()
            && Path::new(&arg).extension().is_some_and(|ext| ext == "toml")
        {
            options_path = Some(arg);
        } else {
            photos.push(arg);
        }
    }
    (options_path, photos)
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let (options_path, photos) = parse_args(std::env::args().skip(1));

    let mut builder = Viewer::builder();
    if let Some(path) = options_path {
        match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options from {path}");
                builder = builder.with_options(options);
            }
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        }
    }
    for photo in photos {
        builder = builder.with_photo(photo);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn first_toml_is_the_options_file() {
        let (options, photos) =
            parse_args(args(&["a.jpg", "night.toml", "b.png", "other.toml"]));
        assert_eq!(options.as_deref(), Some("night.toml"));
        assert_eq!(photos, vec!["a.jpg", "b.png", "other.toml"]);
    }

    #[test]
    fn no_arguments() {
        let (options, photos) = parse_args(args(&[]));
        assert!(options.is_none());
        assert!(photos.is_empty());
    }
}
