use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same clock as event `timeStamp` and rAF timestamps.
#[inline]
pub fn performance_now() -> Option<f64> {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}
