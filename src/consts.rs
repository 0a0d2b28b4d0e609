//! Shared constants for the blog's client-side behaviors.

// ── Comment widget ──────────────────────────────────────────────

/// Id of the comments section element, and the URL fragment that deep-links
/// to it. The embed script mounts into the element with this id, so the
/// three uses have to agree.
pub const COMMENTS_ANCHOR: &str = "commento";

/// Id of the button that reveals the comment widget.
pub const COMMENT_BUTTON_ID: &str = "comment-button";

/// Where the comment embed script is served from. The comment service is
/// reverse-proxied under the blog's own origin.
pub const EMBED_SCRIPT_URL: &str = "/js/commento.js";

/// Id given to the injected embed script tag.
pub const EMBED_SCRIPT_ID: &str = "commento-embed";

/// Comment service endpoint returning per-page comment counts.
pub const COUNT_ENDPOINT: &str = "/api/comment/count";

/// How many times to re-check for the comments element before giving up on
/// the deep-link scroll. The embed builds its DOM asynchronously, so the
/// element may not exist yet when activation happens.
pub const SCROLL_RETRY_LIMIT: u32 = 10;

/// Delay between those re-checks, in milliseconds.
pub const SCROLL_RETRY_DELAY_MS: u64 = 200;

// ── Theme toggle ────────────────────────────────────────────────

/// Id of the light/dark theme toggle button.
pub const THEME_BUTTON_ID: &str = "theme-button";

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "dark-mode";
