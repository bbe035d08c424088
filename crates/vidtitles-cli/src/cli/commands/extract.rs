//! `vidtitles extract <URL>...` – print derived titles without touching files.

use anyhow::Result;
use vidtitles_core::config::VidtitlesConfig;

pub fn run_extract(cfg: &VidtitlesConfig, urls: &[String]) -> Result<()> {
    let options = cfg.run_options();
    for url in urls {
        let title = if options.strict_decoding {
            options.rules.apply_strict(url)?
        } else {
            options.rules.apply(url)
        };
        println!("{title}");
    }
    Ok(())
}
