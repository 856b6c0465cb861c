#![allow(dead_code)]

mod app;
mod catalog;
mod i18n;
mod infra;
mod nav;
mod prefs;
mod theme;
mod ui;

use catalog::data::ContentCatalog;
use catalog::models::CatalogEntry;
use infra::config::AppConfig;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    if args.len() <= 1 {
        if let Err(error) = ui::app_shell::launch_window(config) {
            eprintln!("failed to start pandu-showcase: {error}");
            std::process::exit(1);
        }
        return;
    }

    match args[1].as_str() {
        "list" => {
            let catalog = ContentCatalog::built_in();
            if catalog.is_empty() {
                println!("no works in catalog");
                return;
            }

            print_group("3d products", catalog.products());
            print_group("design works", catalog.designs());
            print_group("video edits", catalog.videos());
        }
        "export" => {
            let catalog = ContentCatalog::built_in();
            let entries: Vec<&CatalogEntry> = catalog.entries().collect();
            match serde_json::to_string_pretty(&entries) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("export failed: {error}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_group(heading: &str, entries: &[CatalogEntry]) {
    println!("{heading} ({}):", entries.len());
    for entry in entries {
        println!("  {}\t{}", entry.title(), entry.media_url());
    }
}

fn print_usage() {
    println!("usage:");
    println!("  pandu-showcase          launch the showcase window");
    println!("  pandu-showcase list     print the catalog grouped by kind");
    println!("  pandu-showcase export   print the catalog as JSON");
}
