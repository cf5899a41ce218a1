use afg_core::entities::Url;

pub fn load_url(url: Option<String>) -> Option<Url> {
    url.as_deref().and_then(|url| {
        url.parse()
            .map_err(|err| {
                // The database should only contain valid URLs
                log::error!("Failed to load URL '{url}' from database: {err}");
                err
            })
            .ok()
    })
}
