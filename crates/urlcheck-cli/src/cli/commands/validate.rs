//! `urlcheck validate <url>...` – format check only.

use anyhow::Result;
use urlcheck_core::url_model;

pub fn run_validate(urls: &[String]) -> Result<()> {
    let mut rejected = 0usize;
    for url in urls {
        match url_model::check_format(url) {
            Ok(trimmed) => println!("{:<8} {}", "valid", trimmed),
            Err(err) => {
                rejected += 1;
                println!("{:<8} {} ({})", "invalid", url, err);
            }
        }
    }
    if rejected > 0 {
        anyhow::bail!("{} of {} inputs failed validation", rejected, urls.len());
    }
    Ok(())
}
