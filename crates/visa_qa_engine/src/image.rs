use visa_qa_core::absolute_url;

use crate::region::ContentRegion;

/// Image sources of the region in document order.
///
/// Root-relative sources are resolved against the region's origin; other
/// sources are kept as written. `None` when no `<img>` has a usable `src`.
pub fn collect_images(region: &ContentRegion<'_>) -> Option<Vec<String>> {
    let base = region.base();
    let images: Vec<String> = region
        .select("img")
        .into_iter()
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| {
            if src.starts_with("//") {
                format!("{}:{}", base.scheme(), src)
            } else if src.starts_with('/') {
                absolute_url(base, src)
            } else {
                src.to_string()
            }
        })
        .collect();

    (!images.is_empty()).then_some(images)
}
