// file: src/session/host.rs
// description: refuses to run unless the session page belongs to the target site
// reference: https://docs.rs/url

use crate::error::{ExportError, Result};
use reqwest::Url;
use tracing::debug;

pub fn ensure_target_page(page_url: &str, target_domain: &str, site_url: &str) -> Result<()> {
    let domain = target_domain.trim().trim_start_matches('.').to_ascii_lowercase();

    let on_target = Url::parse(page_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| host == domain || host.ends_with(&format!(".{}", domain)));

    if on_target {
        debug!("Page {} belongs to {}", page_url, domain);
        return Ok(());
    }

    Err(ExportError::WrongPage {
        site_url: site_url.to_string(),
        page_url: page_url.to_string(),
    })
}
