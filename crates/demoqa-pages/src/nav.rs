//! Text-based navigation for the site's menus and cards, which expose no
//! stable ids. Resolution happens in the page at click time via JS.

use eoka::Page;
use tracing::debug;

use crate::{Error, Result};

/// Click the first element whose trimmed text equals the needle exactly.
/// Walks spans, headings, anchors, buttons and list items in document order;
/// ancestor containers are acceptable targets since the click bubbles.
const CLICK_TEXT_JS: &str = r#"
((needle) => {
    const nodes = document.querySelectorAll('span, h5, a, button, li, div');
    for (const el of nodes) {
        if ((el.textContent || '').trim() === needle) {
            el.scrollIntoView({ block: 'center' });
            el.click();
            return true;
        }
    }
    return false;
})
"#;

/// Click a menu item or card by its exact visible text.
pub(crate) async fn click_by_text(page: &Page, text: &str) -> Result<()> {
    debug!("click_by_text: '{}'", text);
    let js = format!(
        "{}({})",
        CLICK_TEXT_JS,
        serde_json::to_string(text).unwrap()
    );
    let clicked: bool = page.evaluate(&js).await?;
    if !clicked {
        return Err(Error::ElementNotFound(format!(
            "element with text '{text}'"
        )));
    }
    Ok(())
}

/// Whether a selector currently matches a visible element.
pub(crate) async fn is_visible(page: &Page, selector: &str) -> Result<bool> {
    let js = format!(
        r#"(() => {{
            const el = document.querySelector({});
            if (!el) return false;
            const style = getComputedStyle(el);
            return style.display !== 'none' && style.visibility !== 'hidden' && el.offsetParent !== null;
        }})()"#,
        serde_json::to_string(selector).unwrap()
    );
    Ok(page.evaluate(&js).await?)
}
