//! CLI smoke entry point.
//!
//! # Responsibility
//! - Start file logging, then build the sample catalog and print its groups
//!   and previews.
//! - `--json` prints the catalog snapshot instead.
//! - `--log-dir <path>` overrides the default log directory.

use golfguide_core::{
    build_sample_catalog, core_version, default_log_dir, default_log_level, init_logging,
    BaseUriResolver, CatalogSnapshot, ALL_GROUPS_SELECTOR,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, PartialEq, Eq)]
struct Options {
    as_json: bool,
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let result = parse_options(std::env::args().skip(1)).and_then(|options| run(&options));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("golfguide: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_options(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        as_json: false,
        log_dir: default_log_dir(),
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.as_json = true,
            "--log-dir" => {
                let dir = args.next().ok_or("--log-dir needs a path")?;
                options.log_dir = PathBuf::from(dir);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

fn start_logging(options: &Options) -> Result<(), String> {
    let log_dir = options
        .log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not UTF-8", options.log_dir.display()))?;
    init_logging(default_log_level().as_str(), log_dir)
}

fn run(options: &Options) -> Result<(), String> {
    start_logging(options)?;
    let catalog = build_sample_catalog().map_err(|err| err.to_string())?;
    let resolver = BaseUriResolver::app_package().map_err(|err| err.to_string())?;

    if options.as_json {
        let snapshot = CatalogSnapshot::capture(&catalog, &resolver);
        let json = serde_json::to_string_pretty(&snapshot).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("golfguide_core version={}", core_version());
    let groups = catalog
        .list_groups(ALL_GROUPS_SELECTOR)
        .map_err(|err| err.to_string())?;
    for group in groups {
        println!(
            "{} [{}] items={} top_items={}",
            group,
            group.unique_id(),
            group.items().len(),
            group.top_items().len()
        );
        for item in group.top_items() {
            let image = item
                .image(&resolver)
                .map(|handle| handle.uri().to_string())
                .unwrap_or_default();
            println!(
                "  {} [{}] {}x{} {}",
                item,
                item.unique_id(),
                item.col_span(),
                item.row_span(),
                image
            );
        }
    }
    Ok(())
}
