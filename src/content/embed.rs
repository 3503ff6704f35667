use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("YouTube id pattern should compile")
});

const YOUTUBE_ID_LEN: usize = 11;

/// Rewrites a YouTube watch/share link to its embeddable form.
///
/// Anything that doesn't carry an 11 character video id is returned as is and
/// embedded verbatim.
pub fn embed_url(src: &str) -> String {
    YOUTUBE_ID
        .captures(src)
        .and_then(|caps| caps.get(2))
        .map(|id| id.as_str())
        .filter(|id| id.chars().count() == YOUTUBE_ID_LEN)
        .map(|id| format!("https://www.youtube.com/embed/{id}"))
        .unwrap_or_else(|| src.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_and_short_links() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ?t=42"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_url("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_already_embedded_link_is_stable() {
        let url = "https://www.youtube.com/embed/dQw4w9WgXcQ";
        assert_eq!(embed_url(url), url);
    }

    #[test]
    fn test_other_sources_pass_through() {
        assert_eq!(
            embed_url("https://player.vimeo.com/video/12345"),
            "https://player.vimeo.com/video/12345"
        );
        // wrong id length
        assert_eq!(
            embed_url("https://youtu.be/short"),
            "https://youtu.be/short"
        );
    }

    #[test]
    fn test_id_length_counts_characters() {
        // 11 characters, 12 bytes
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcé"),
            "https://www.youtube.com/embed/dQw4w9WgXcé"
        );
        // 10 characters, 11 bytes
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXé"),
            "https://youtu.be/dQw4w9WgXé"
        );
    }
}
