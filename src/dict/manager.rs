use crate::config::Config;
use crate::splitters::dictionary::Dictionary;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

// Pinned commit so downloads are reproducible
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";
const WORDLIST_VERSION: &str = "2023.12";

pub fn list_dictionaries() -> Result<()> {
    let data_dir = Config::data_dir().context("Failed to get data directory")?;

    println!("{}", "Available dictionaries:".bold());
    println!();
    println!(
        "  {} {} ({})",
        "✓".green(),
        "embedded".cyan().bold(),
        format!("{} words, built in", Dictionary::embedded().len()).dimmed()
    );

    if data_dir.exists() {
        for path in installed(&data_dir)? {
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("unknown");
            let size_kb = fs::metadata(&path)?.len() / 1024;

            println!(
                "  {} {} ({})",
                "✓".green(),
                name.cyan().bold(),
                format!("{}KB", size_kb).dimmed()
            );
        }
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

fn installed(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("dict") {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn download_dictionary(name: &str) -> Result<()> {
    let wordlist_url = match name {
        "en_US" | "en_GB" | "english" => format!("{}/words_alpha.txt", WORDLIST_BASE_URL),
        other => {
            anyhow::bail!(
                "Dictionary '{}' cannot be downloaded. Use 'english', or build one with `identsplit dict build`.",
                other
            );
        }
    };

    println!(
        "{} dictionary {} (version: {})...",
        "Downloading".cyan().bold(),
        name.yellow(),
        WORDLIST_VERSION.dimmed()
    );
    println!("Source: {}", wordlist_url.dimmed());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message("Downloading...");

    let response =
        reqwest::blocking::get(&wordlist_url).context("Failed to download dictionary")?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to download dictionary: HTTP {}", response.status());
    }

    let content = response.text()?;
    pb.finish_with_message("Download complete");

    let dict_path = Dictionary::get_dictionary_path(name)?;
    install(&content, &dict_path)
}

/// Compile a one-word-per-line file into an installed dictionary.
pub fn build_dictionary(wordlist: &Path, name: &str) -> Result<()> {
    let content = fs::read_to_string(wordlist)
        .with_context(|| format!("Failed to read word list: {}", wordlist.display()))?;

    let dict_path = Dictionary::get_dictionary_path(name)?;
    install(&content, &dict_path)
}

fn install(content: &str, dict_path: &Path) -> Result<()> {
    println!("{}", "Building dictionary...".cyan());

    let words = words_from_list(content);
    println!("Found {} words", words.len().to_string().yellow());
    debug!("writing {} words to {}", words.len(), dict_path.display());

    Dictionary::build_from_words(&words, dict_path)?;

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

/// Lowercased words, one per line. Comments and single letters are dropped.
fn words_from_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.starts_with('#') && line.chars().count() > 1)
        .collect()
}

pub fn show_info(name: &str) -> Result<()> {
    if name == "embedded" {
        println!("{}", "Dictionary: embedded".bold());
        println!("  Format: FST (built in)");
        println!("  Words: {}", Dictionary::embedded().len().to_string().yellow());
        return Ok(());
    }

    let dict_path = if Path::new(name).is_file() {
        PathBuf::from(name)
    } else {
        Dictionary::get_dictionary_path(name)?
    };

    if !dict_path.exists() {
        println!(
            "{} Dictionary {} not found.",
            "✗".red().bold(),
            name.yellow()
        );
        println!(
            "Run {} to install it.",
            format!("identsplit dict download {}", name).cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(&dict_path)?;
    let dictionary = Dictionary::load_from_path(&dict_path)?;

    println!("{}", format!("Dictionary: {}", name).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Format: FST (Finite State Transducer)");
    println!("  Words: {}", dictionary.len().to_string().yellow());

    Ok(())
}
